//! The composition root: assembles navigation, main content and the bound logger
//! into one [`CompositionTree`] per render.

use anyhow::Result;
use thiserror::Error;

use crate::fragment::{BoxedProducer, FragmentProducer};
use crate::logging::LoggerVersion;
use crate::slot::Slot;
use crate::tree::CompositionTree;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CompositionError {
    #[error("no {0} collaborator was bound")]
    MissingCollaborator(Slot),
}

/// The single producer currently wired into the logging slot.
struct LoggingSlot<F> {
    version: LoggerVersion,
    producer: BoxedProducer<F>,
}

pub struct CompositionRoot<F> {
    navigation: BoxedProducer<F>,
    main_content: BoxedProducer<F>,
    logging: LoggingSlot<F>,
}

impl<F> CompositionRoot<F> {
    pub fn builder() -> CompositionRootBuilder<F> {
        CompositionRootBuilder::default()
    }

    pub fn new(
        navigation: impl FragmentProducer<F> + 'static,
        main_content: impl FragmentProducer<F> + 'static,
        logger_version: LoggerVersion,
        logger: impl FragmentProducer<F> + 'static,
    ) -> Self {
        Self {
            navigation: Box::new(navigation),
            main_content: Box::new(main_content),
            logging: LoggingSlot {
                version: logger_version,
                producer: Box::new(logger),
            },
        }
    }

    pub fn logger_version(&self) -> LoggerVersion {
        self.logging.version
    }

    /// Compose one tree. The first collaborator error is returned as-is and no
    /// later producer runs.
    pub fn render(&self) -> Result<CompositionTree<F>> {
        let navigation = produce(Slot::Navigation, &*self.navigation)?;
        let main_content = produce(Slot::MainContent, &*self.main_content)?;
        let logging = produce(Slot::Logging, &*self.logging.producer)?;
        Ok(CompositionTree::new(navigation, main_content, logging))
    }

    /// Bind a different logger. The previously bound producer is dropped here.
    pub fn rebind_logging(
        self,
        version: LoggerVersion,
        logger: impl FragmentProducer<F> + 'static,
    ) -> Self {
        tracing::debug!(
            from = %self.logging.version,
            to = %version,
            "rebinding logging slot"
        );
        Self {
            navigation: self.navigation,
            main_content: self.main_content,
            logging: LoggingSlot {
                version,
                producer: Box::new(logger),
            },
        }
    }
}

fn produce<F>(slot: Slot, producer: &dyn FragmentProducer<F>) -> Result<F> {
    producer.produce().inspect_err(|err| {
        tracing::debug!(slot = %slot, error = %err, "fragment producer failed");
    })
}

pub struct CompositionRootBuilder<F> {
    navigation: Option<BoxedProducer<F>>,
    main_content: Option<BoxedProducer<F>>,
    logging: Option<LoggingSlot<F>>,
}

impl<F> Default for CompositionRootBuilder<F> {
    fn default() -> Self {
        Self {
            navigation: None,
            main_content: None,
            logging: None,
        }
    }
}

impl<F> CompositionRootBuilder<F> {
    pub fn navigation(mut self, producer: impl FragmentProducer<F> + 'static) -> Self {
        self.navigation = Some(Box::new(producer));
        self
    }

    pub fn main_content(mut self, producer: impl FragmentProducer<F> + 'static) -> Self {
        self.main_content = Some(Box::new(producer));
        self
    }

    /// Bind the logging slot. Calling this again replaces the earlier binding.
    pub fn logging(
        mut self,
        version: LoggerVersion,
        producer: impl FragmentProducer<F> + 'static,
    ) -> Self {
        self.logging = Some(LoggingSlot {
            version,
            producer: Box::new(producer),
        });
        self
    }

    pub fn build(self) -> Result<CompositionRoot<F>, CompositionError> {
        let navigation = self
            .navigation
            .ok_or(CompositionError::MissingCollaborator(Slot::Navigation))?;
        let main_content = self
            .main_content
            .ok_or(CompositionError::MissingCollaborator(Slot::MainContent))?;
        let logging = self
            .logging
            .ok_or(CompositionError::MissingCollaborator(Slot::Logging))?;
        tracing::debug!(logger = %logging.version, "composition root built");
        Ok(CompositionRoot {
            navigation,
            main_content,
            logging,
        })
    }
}

#[cfg(test)]
mod tests;
