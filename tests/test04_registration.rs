use std::sync::Arc;

use tds_diagnostics::handler::{ClientCallback, CsLibCallback, ServerCallback};
use tds_diagnostics::prelude::*;

/// Registry double that records the order of configuration calls and keeps
/// the attached callbacks so tests can invoke them like the library would.
#[derive(Default)]
struct RecordingRegistry {
    calls: Vec<CallbackSlot>,
    cs_lib: Option<CsLibCallback>,
    client: Option<ClientCallback>,
    server: Option<ServerCallback>,
}

impl CallbackRegistry for RecordingRegistry {
    fn set_cs_lib_callback(&mut self, callback: CsLibCallback) -> Result<(), DiagnosticsError> {
        self.calls.push(CallbackSlot::CsLibMessage);
        self.cs_lib = Some(callback);
        Ok(())
    }

    fn set_client_callback(&mut self, callback: ClientCallback) -> Result<(), DiagnosticsError> {
        self.calls.push(CallbackSlot::ClientMessage);
        self.client = Some(callback);
        Ok(())
    }

    fn set_server_callback(&mut self, callback: ServerCallback) -> Result<(), DiagnosticsError> {
        self.calls.push(CallbackSlot::ServerMessage);
        self.server = Some(callback);
        Ok(())
    }
}

/// Registry double that rejects a chosen slot with a library return code.
struct FailingRegistry {
    fail_at: CallbackSlot,
    calls: Vec<CallbackSlot>,
}

impl FailingRegistry {
    fn record(&mut self, slot: CallbackSlot) -> Result<(), DiagnosticsError> {
        self.calls.push(slot);
        if slot == self.fail_at {
            return Err(DiagnosticsError::Registration {
                slot,
                reason: RegistrationFailure::Retcode(0),
            });
        }
        Ok(())
    }
}

impl CallbackRegistry for FailingRegistry {
    fn set_cs_lib_callback(&mut self, _: CsLibCallback) -> Result<(), DiagnosticsError> {
        self.record(CallbackSlot::CsLibMessage)
    }

    fn set_client_callback(&mut self, _: ClientCallback) -> Result<(), DiagnosticsError> {
        self.record(CallbackSlot::ClientMessage)
    }

    fn set_server_callback(&mut self, _: ServerCallback) -> Result<(), DiagnosticsError> {
        self.record(CallbackSlot::ServerMessage)
    }
}

#[test]
fn registers_all_three_slots_in_order() {
    let mut registry = RecordingRegistry::default();
    register_diagnostics(&mut registry, &DiagnosticsConfig::default()).expect("registration");

    assert_eq!(
        registry.calls,
        vec![
            CallbackSlot::CsLibMessage,
            CallbackSlot::ClientMessage,
            CallbackSlot::ServerMessage,
        ]
    );
    assert!(registry.cs_lib.is_some());
    assert!(registry.client.is_some());
    assert!(registry.server.is_some());
}

#[test]
fn registered_callbacks_render_through_the_configured_sink() {
    let sink = Arc::new(BufferSink::new());
    let config = DiagnosticsConfig::builder().sink(Arc::clone(&sink)).finish();

    let mut registry = RecordingRegistry::default();
    register_diagnostics(&mut registry, &config).expect("registration");

    let server_cb = registry.server.expect("server callback attached");
    let msg = ServerMessage::new(2601, 14, 1, 3, "duplicate key").with_procedure("sp_load");
    let status = server_cb(&msg);
    assert_eq!(status, HandlerStatus::Consumed);

    let client_cb = registry.client.expect("client callback attached");
    let code = MessageCode::from_parts(1, 4, 0, 44);
    let status = client_cb(&ClientMessage::new(5, code, "Login failed"));
    assert_eq!(status, HandlerStatus::Consumed);

    let entries = sink.drain();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].contains("Procedure name: sp_load"));
    assert!(entries[1].starts_with("Client Library error:"));
}

#[test]
fn stops_at_first_failed_registration() {
    let mut registry = FailingRegistry {
        fail_at: CallbackSlot::CsLibMessage,
        calls: Vec::new(),
    };

    let err = register_diagnostics(&mut registry, &DiagnosticsConfig::default())
        .expect_err("first registration fails");

    assert_eq!(registry.calls, vec![CallbackSlot::CsLibMessage]);
    match err {
        DiagnosticsError::Registration { slot, reason } => {
            assert_eq!(slot, CallbackSlot::CsLibMessage);
            assert_eq!(reason, RegistrationFailure::Retcode(0));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failure_in_the_middle_leaves_later_slots_untouched() {
    let mut registry = FailingRegistry {
        fail_at: CallbackSlot::ClientMessage,
        calls: Vec::new(),
    };

    let err = register_diagnostics(&mut registry, &DiagnosticsConfig::default())
        .expect_err("second registration fails");

    assert_eq!(
        registry.calls,
        vec![CallbackSlot::CsLibMessage, CallbackSlot::ClientMessage]
    );
    assert_eq!(
        err.to_string(),
        "client-message callback registration failed: library returned CS_FAIL"
    );
}
