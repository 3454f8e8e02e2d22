//! Fixed-format rendering of diagnostic records.
//!
//! Each message variant is described by a table of lines evaluated in fixed
//! order; a line is rendered only when its condition holds, so optional
//! fields are omitted entirely rather than printed empty.

use crate::message::{ClientMessage, CsLibMessage, ServerMessage};

/// One line of a diagnostic: render only when `applies` holds.
struct LineRule<M> {
    applies: fn(&M) -> bool,
    render: fn(&M, &mut String),
}

fn render_with<M>(msg: &M, lines: &[LineRule<M>]) -> String {
    let mut out = String::new();
    for line in lines {
        if (line.applies)(msg) {
            (line.render)(msg, &mut out);
        }
    }
    out
}

const CS_LIB_LINES: &[LineRule<CsLibMessage>] = &[
    LineRule {
        applies: |_| true,
        render: |_, out| out.push_str("CS-Library error:\n"),
    },
    LineRule {
        applies: |_| true,
        render: |m, out| {
            out.push_str(&format!(
                "\tseverity({}) layer({}) origin({}) number({})\n",
                m.code.severity(),
                m.code.layer(),
                m.code.origin(),
                m.code.number()
            ));
        },
    },
    LineRule {
        applies: |_| true,
        render: |m, out| out.push_str(&format!("\t{}\n", m.text)),
    },
    LineRule {
        applies: |m| m.os_text.is_some(),
        render: |m, out| {
            if let Some(os_text) = &m.os_text {
                out.push_str(&format!("Operating System Error: {os_text}\n"));
            }
        },
    },
];

const CLIENT_LINES: &[LineRule<ClientMessage>] = &[
    LineRule {
        applies: |_| true,
        render: |_, out| out.push_str("Client Library error:\n"),
    },
    LineRule {
        applies: |_| true,
        render: |m, out| {
            out.push_str(&format!(
                "\tseverity({}) number({}) origin({}) layer({})\n",
                m.severity,
                m.code.number(),
                m.code.origin(),
                m.code.layer()
            ));
        },
    },
    LineRule {
        applies: |_| true,
        render: |m, out| out.push_str(&format!("\t{}\n", m.text)),
    },
    LineRule {
        applies: |m| m.os_error.is_some(),
        render: |m, out| {
            if let Some(os) = &m.os_error {
                out.push_str(&format!(
                    "Operating system error number({}):\n\t{}\n",
                    os.number, os.text
                ));
            }
        },
    },
];

const SERVER_LINES: &[LineRule<ServerMessage>] = &[
    LineRule {
        applies: |_| true,
        render: |_, out| out.push_str("Server message:\n"),
    },
    LineRule {
        applies: |_| true,
        render: |m, out| {
            out.push_str(&format!(
                "\tnumber({}) severity({}) state({}) line({})\n",
                m.number, m.severity, m.state, m.line
            ));
        },
    },
    LineRule {
        applies: |m| m.server.is_some(),
        render: |m, out| {
            if let Some(server) = &m.server {
                out.push_str(&format!("\tServer name: {server}\n"));
            }
        },
    },
    LineRule {
        applies: |m| m.procedure.is_some(),
        render: |m, out| {
            if let Some(procedure) = &m.procedure {
                out.push_str(&format!("\tProcedure name: {procedure}\n"));
            }
        },
    },
    LineRule {
        applies: |_| true,
        render: |m, out| out.push_str(&format!("\t{}\n", m.text)),
    },
];

/// Render a client-library (CS-Library) diagnostic.
#[must_use]
pub fn render_cs_lib(msg: &CsLibMessage) -> String {
    render_with(msg, CS_LIB_LINES)
}

/// Render a connection-scoped client diagnostic.
#[must_use]
pub fn render_client(msg: &ClientMessage) -> String {
    render_with(msg, CLIENT_LINES)
}

/// Render a server diagnostic.
#[must_use]
pub fn render_server(msg: &ServerMessage) -> String {
    render_with(msg, SERVER_LINES)
}
