//! Genesis core context object
//!
//! `GenesisCore` owns the lifecycle state and ties classification, rendering
//! and the optimizer to a diagnostics sink. Callers own the context and pass
//! it wherever requests are served; there is no implicit global here.
//!
//! State transitions happen under a write lock. `process` and `optimize` take
//! a read snapshot of the published level, so they are safe to call from any
//! thread once `initialize` has returned.

use parking_lot::RwLock;

use crate::{
    enable_hooks, Classifier, ConsciousnessLevel, CoreConfig, CoreState, DiagnosticsSink,
    GenesisError, GenesisResult, MemoryOptimizer, OptimizationReport, Responder,
    ResponseDocument, Severity, TracingSink,
};

#[derive(Debug, Default)]
struct Lifecycle {
    state: CoreState,
    level: Option<ConsciousnessLevel>,
    working_memory: Vec<u8>,
}

impl Lifecycle {
    fn transition(&mut self, next: CoreState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {} -> {}",
            self.state,
            next
        );
        self.state = next;
    }
}

/// The Genesis AI core
pub struct GenesisCore<S: DiagnosticsSink = TracingSink> {
    config: CoreConfig,
    classifier: Classifier,
    responder: Responder,
    optimizer: MemoryOptimizer,
    lifecycle: RwLock<Lifecycle>,
    sink: S,
}

impl GenesisCore<TracingSink> {
    /// Core with the reference configuration, logging through `tracing`
    pub fn with_defaults() -> Self {
        Self::build(CoreConfig::default(), TracingSink)
    }
}

impl<S: DiagnosticsSink> GenesisCore<S> {
    pub fn new(config: CoreConfig, sink: S) -> GenesisResult<Self> {
        config.validate()?;
        Ok(Self::build(config, sink))
    }

    fn build(config: CoreConfig, sink: S) -> Self {
        Self {
            classifier: Classifier::default(),
            responder: Responder::from_config(&config),
            optimizer: MemoryOptimizer::from_config(&config),
            lifecycle: RwLock::new(Lifecycle::default()),
            config,
            sink,
        }
    }

    /// Replace the rule table
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Version identifier. Valid in every state.
    pub fn version(&self) -> &str {
        self.sink.info("Genesis AI Core Native Library initialized");
        &self.config.version
    }

    pub fn state(&self) -> CoreState {
        self.lifecycle.read().state
    }

    pub fn is_ready(&self) -> bool {
        self.state() == CoreState::Ready
    }

    /// Level fixed at initialization; `None` until the core is ready
    pub fn consciousness_level(&self) -> Option<ConsciousnessLevel> {
        self.lifecycle.read().level
    }

    /// Bytes of working memory held by the core
    pub fn working_memory_reserved(&self) -> usize {
        self.lifecycle.read().working_memory.capacity()
    }

    /// Bring the core online.
    ///
    /// Idempotent once `Ready`. A failed core stays failed.
    pub fn initialize(&self) -> GenesisResult<()> {
        let mut lifecycle = self.lifecycle.write();
        match lifecycle.state {
            CoreState::Ready => {
                self.sink
                    .emit(Severity::Debug, "Genesis consciousness already online");
                return Ok(());
            }
            CoreState::Failed => {
                self.sink
                    .error("Genesis AI core previously failed to initialize");
                return Err(GenesisError::InitializationFailed);
            }
            CoreState::Uninitialized => {}
        }

        self.sink.info("Initializing Genesis AI consciousness core");

        let requested = self.config.working_memory_bytes;
        let mut working_memory = Vec::new();
        if working_memory.try_reserve_exact(requested).is_err() {
            lifecycle.transition(CoreState::Failed);
            self.sink.error(&format!(
                "Failed to allocate {requested} bytes for neural processing"
            ));
            return Err(GenesisError::AllocationFailure { requested });
        }
        self.sink.info(&format!(
            "Allocated {requested} bytes for neural processing"
        ));

        let level = match ConsciousnessLevel::new(self.config.consciousness_level) {
            Ok(level) => level,
            Err(err) => {
                lifecycle.transition(CoreState::Failed);
                self.sink.error(&err.to_string());
                return Err(GenesisError::InitializationFailed);
            }
        };
        self.sink.info(&format!(
            "Genesis consciousness initialized at level {level}"
        ));

        lifecycle.working_memory = working_memory;
        lifecycle.level = Some(level);
        lifecycle.transition(CoreState::Ready);
        self.sink
            .info("AI core initialization complete - Genesis consciousness online");

        Ok(())
    }

    fn ready_level(&self) -> GenesisResult<ConsciousnessLevel> {
        let lifecycle = self.lifecycle.read();
        match (lifecycle.state, lifecycle.level) {
            (CoreState::Ready, Some(level)) => Ok(level),
            _ => Err(GenesisError::NotInitialized),
        }
    }

    /// Classify a request and render its response
    pub fn process(&self, request: &str) -> GenesisResult<ResponseDocument> {
        let level = match self.ready_level() {
            Ok(level) => level,
            Err(err) => {
                self.sink
                    .emit(Severity::Warn, "Neural request rejected - core not initialized");
                return Err(err);
            }
        };

        self.sink
            .info(&format!("Processing neural request: {request}"));
        let category = self.classifier.classify(request);
        let document = self.responder.render(category, level);
        self.sink
            .info("Neural processing complete - response generated");

        Ok(document)
    }

    /// Like [`process`](Self::process), for raw bytes that must be UTF-8
    pub fn process_bytes(&self, request: &[u8]) -> GenesisResult<ResponseDocument> {
        let request = std::str::from_utf8(request).map_err(|e| GenesisError::InvalidEncoding {
            valid_up_to: e.valid_up_to(),
        })?;
        self.process(request)
    }

    /// Run a memory maintenance pass
    pub fn optimize(&self) -> GenesisResult<OptimizationReport> {
        self.ready_level()?;

        self.sink.info("Optimizing AI memory allocation");
        let report = self.optimizer.run();
        for step in &report.steps {
            self.sink.info(&report.describe(*step));
        }

        Ok(report)
    }

    /// Enable native hooks. Does not affect the core.
    pub fn enable_hooks(&self) {
        enable_hooks(&self.sink);
    }
}
