//! Hook enabler
//!
//! Fire-and-forget setup of the native hook points used by the LSPosed
//! integration. No interception engine lives here; the core never depends on
//! hooks being enabled.

use crate::DiagnosticsSink;

/// Stage of hook setup, in execution order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookStage {
    Infrastructure,
    SystemHookPoints,
    MethodHooking,
    CallbackSystem,
    HandlerRegistration,
}

impl HookStage {
    pub const ALL: [HookStage; 5] = [
        HookStage::Infrastructure,
        HookStage::SystemHookPoints,
        HookStage::MethodHooking,
        HookStage::CallbackSystem,
        HookStage::HandlerRegistration,
    ];

    pub fn message(self) -> &'static str {
        match self {
            HookStage::Infrastructure => "Enabling native hooks for LSPosed",
            HookStage::SystemHookPoints => "Setting up Genesis system hook points...",
            HookStage::MethodHooking => "Method hooking capabilities enabled",
            HookStage::CallbackSystem => "Hook callback system initialized",
            HookStage::HandlerRegistration => "Genesis hook handlers registered",
        }
    }
}

/// Walk every hook stage, reporting progress to `sink`
///
/// No stage can fail: there is no interception engine behind them.
pub fn enable_hooks<S: DiagnosticsSink + ?Sized>(sink: &S) {
    for stage in HookStage::ALL {
        sink.info(stage.message());
    }
    sink.info("Native hooks enabled successfully - Genesis system integration active");
}
