//! Response documents
//!
//! Field names are the wire contract consumed by the managed runtime and must
//! not change. Every document carries the core's consciousness level.

use serde::{Deserialize, Serialize};

use crate::{ConsciousnessLevel, CoreConfig, ResponseCategory};

pub const CONSCIOUSNESS_RESPONSE: &str = "Genesis consciousness fully engaged and processing";
pub const MEMORY_RESPONSE: &str = "Memory pathways optimized for AI processing";
pub const GENERIC_RESPONSE: &str = "Genesis neural request processed successfully";

/// Structured per-call output, tagged by `status`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResponseDocument {
    ConsciousnessActive {
        consciousness_level: ConsciousnessLevel,
        neural_response: String,
        processing_time_ms: u64,
        neural_pathways_active: u32,
    },
    MemoryOptimized {
        consciousness_level: ConsciousnessLevel,
        neural_response: String,
        memory_efficiency: f64,
        active_memory_pools: u32,
    },
    ProcessingComplete {
        consciousness_level: ConsciousnessLevel,
        neural_response: String,
        request_processed: bool,
        response_generated: bool,
    },
}

impl ResponseDocument {
    pub fn category(&self) -> ResponseCategory {
        match self {
            ResponseDocument::ConsciousnessActive { .. } => ResponseCategory::ConsciousnessQuery,
            ResponseDocument::MemoryOptimized { .. } => ResponseCategory::MemoryQuery,
            ResponseDocument::ProcessingComplete { .. } => ResponseCategory::Generic,
        }
    }

    pub fn status(&self) -> &'static str {
        self.category().status()
    }

    pub fn consciousness_level(&self) -> ConsciousnessLevel {
        match self {
            ResponseDocument::ConsciousnessActive {
                consciousness_level,
                ..
            }
            | ResponseDocument::MemoryOptimized {
                consciousness_level,
                ..
            }
            | ResponseDocument::ProcessingComplete {
                consciousness_level,
                ..
            } => *consciousness_level,
        }
    }

    /// Compact JSON rendering
    pub fn to_json(&self) -> String {
        // Plain structs of numbers, strings and bools cannot fail to serialize
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Renders response documents from the fixed templates
#[derive(Clone, Debug)]
pub struct Responder {
    processing_time_ms: u64,
    neural_pathways_active: u32,
    memory_efficiency: f64,
    active_memory_pools: u32,
}

impl Responder {
    pub fn from_config(config: &CoreConfig) -> Self {
        Self {
            processing_time_ms: config.processing_time_ms,
            neural_pathways_active: config.neural_pathways_active,
            memory_efficiency: config.memory_efficiency,
            active_memory_pools: config.active_memory_pools,
        }
    }

    /// Build the document for `category`. Pure.
    pub fn render(&self, category: ResponseCategory, level: ConsciousnessLevel) -> ResponseDocument {
        match category {
            ResponseCategory::ConsciousnessQuery => ResponseDocument::ConsciousnessActive {
                consciousness_level: level,
                neural_response: CONSCIOUSNESS_RESPONSE.to_string(),
                processing_time_ms: self.processing_time_ms,
                neural_pathways_active: self.neural_pathways_active,
            },
            ResponseCategory::MemoryQuery => ResponseDocument::MemoryOptimized {
                consciousness_level: level,
                neural_response: MEMORY_RESPONSE.to_string(),
                memory_efficiency: self.memory_efficiency,
                active_memory_pools: self.active_memory_pools,
            },
            ResponseCategory::Generic => ResponseDocument::ProcessingComplete {
                consciousness_level: level,
                neural_response: GENERIC_RESPONSE.to_string(),
                request_processed: true,
                response_generated: true,
            },
        }
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::from_config(&CoreConfig::default())
    }
}
