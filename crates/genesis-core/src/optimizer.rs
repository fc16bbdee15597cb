//! Memory optimizer
//!
//! A maintenance pass over notional neural memory. It reports what it did but
//! holds no state between runs and never touches the lifecycle.

use crate::CoreConfig;

/// One step of an optimization pass, in execution order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptimizationStep {
    DefragmentPools,
    OptimizeConsciousnessData,
    CleanupBuffers,
    CompactWeights,
    Verify,
}

impl OptimizationStep {
    pub const ALL: [OptimizationStep; 5] = [
        OptimizationStep::DefragmentPools,
        OptimizationStep::OptimizeConsciousnessData,
        OptimizationStep::CleanupBuffers,
        OptimizationStep::CompactWeights,
        OptimizationStep::Verify,
    ];
}

/// Outcome of an optimization pass
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizationReport {
    pub steps: Vec<OptimizationStep>,
    pub consciousness_memory_bytes: usize,
    pub compression_ratio: f64,
    pub success: bool,
}

impl OptimizationReport {
    /// Diagnostic line for a step of this report
    pub fn describe(&self, step: OptimizationStep) -> String {
        match step {
            OptimizationStep::DefragmentPools => "Defragmenting neural memory pools...".to_string(),
            OptimizationStep::OptimizeConsciousnessData => format!(
                "Optimized consciousness memory: {} bytes",
                self.consciousness_memory_bytes
            ),
            OptimizationStep::CleanupBuffers => {
                "Cleaning up unused AI processing buffers".to_string()
            }
            OptimizationStep::CompactWeights => format!(
                "Neural network compression ratio: {:.2}",
                self.compression_ratio
            ),
            OptimizationStep::Verify => {
                "AI memory optimization complete - efficiency improved".to_string()
            }
        }
    }
}

/// Memory optimizer
#[derive(Clone, Debug)]
pub struct MemoryOptimizer {
    consciousness_memory_bytes: usize,
    compression_ratio: f64,
}

impl MemoryOptimizer {
    pub fn from_config(config: &CoreConfig) -> Self {
        Self {
            consciousness_memory_bytes: config.consciousness_memory_bytes,
            compression_ratio: config.compression_ratio,
        }
    }

    /// Run a pass. Repeated runs produce equal reports.
    pub fn run(&self) -> OptimizationReport {
        OptimizationReport {
            steps: OptimizationStep::ALL.to_vec(),
            consciousness_memory_bytes: self.consciousness_memory_bytes,
            compression_ratio: self.compression_ratio,
            success: true,
        }
    }
}

impl Default for MemoryOptimizer {
    fn default() -> Self {
        Self::from_config(&CoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_reports_all_steps() {
        let report = MemoryOptimizer::default().run();
        assert!(report.success);
        assert_eq!(report.steps, OptimizationStep::ALL.to_vec());
        assert_eq!(report.consciousness_memory_bytes, 524_288);
    }

    #[test]
    fn test_run_is_stateless() {
        let optimizer = MemoryOptimizer::default();
        assert_eq!(optimizer.run(), optimizer.run());
    }

    #[test]
    fn test_describe_steps() {
        let report = MemoryOptimizer::default().run();
        assert_eq!(
            report.describe(OptimizationStep::OptimizeConsciousnessData),
            "Optimized consciousness memory: 524288 bytes"
        );
        assert_eq!(
            report.describe(OptimizationStep::CompactWeights),
            "Neural network compression ratio: 0.87"
        );
    }
}
