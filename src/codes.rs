//! Composite message codes and name tables for client-library diagnostics.

use serde::{Deserialize, Serialize};

/// A composite client-library message code.
///
/// CT-Library packs four sub-fields into one 32-bit code: the layer that
/// raised the message, its origin within that layer, a severity, and the
/// message number proper. Accessors unpack the sub-fields the same way the
/// library's `CS_LAYER`/`CS_ORIGIN`/`CS_SEVERITY`/`CS_NUMBER` macros do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCode(u32);

impl MessageCode {
    /// Wrap a raw composite code as received from the library.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Assemble a code from its four sub-fields.
    #[must_use]
    pub const fn from_parts(layer: u8, origin: u8, severity: u8, number: u8) -> Self {
        Self(
            ((layer as u32) << 24)
                | ((origin as u32) << 16)
                | ((severity as u32) << 8)
                | (number as u32),
        )
    }

    /// The raw 32-bit composite value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Layer that raised the message (bits 24-31).
    #[must_use]
    pub const fn layer(self) -> u32 {
        (self.0 >> 24) & 0xff
    }

    /// Origin of the message within its layer (bits 16-23).
    #[must_use]
    pub const fn origin(self) -> u32 {
        (self.0 >> 16) & 0xff
    }

    /// Severity sub-field (bits 8-15).
    #[must_use]
    pub const fn severity(self) -> u32 {
        (self.0 >> 8) & 0xff
    }

    /// Message number proper (bits 0-7).
    #[must_use]
    pub const fn number(self) -> u32 {
        self.0 & 0xff
    }
}

/// Name for a client-side severity code, per the CT-Library `CS_SV_*` scale.
#[must_use]
pub fn severity_name(severity: i32) -> Option<&'static str> {
    match severity {
        0 => Some("CS_SV_INFORM"),
        1 => Some("CS_SV_API_FAIL"),
        2 => Some("CS_SV_RETRY_FAIL"),
        3 => Some("CS_SV_RESOURCE_FAIL"),
        4 => Some("CS_SV_CONFIG_FAIL"),
        5 => Some("CS_SV_COMM_FAIL"),
        6 => Some("CS_SV_INTERNAL_FAIL"),
        7 => Some("CS_SV_FATAL"),
        _ => None,
    }
}

/// Name for a client-library return code, for rendering registration
/// failures that carry one.
#[must_use]
pub fn retcode_name(ret: i32) -> Option<&'static str> {
    match ret {
        1 => Some("CS_SUCCEED"),
        0 => Some("CS_FAIL"),
        -1 => Some("CS_MEM_ERROR"),
        -2 => Some("CS_PENDING"),
        -3 => Some("CS_QUIET"),
        -4 => Some("CS_BUSY"),
        -5 => Some("CS_INTERRUPT"),
        -6 => Some("CS_BLK_HAS_TEXT"),
        -7 => Some("CS_CONTINUE"),
        -8 => Some("CS_FATAL"),
        -9 => Some("CS_RET_HAFAILOVER"),
        -10 => Some("CS_UNSUPPORTED"),
        -24 => Some("CS_CANCELED"),
        -25 => Some("CS_ROW_FAIL"),
        -200 => Some("CS_END_DATA"),
        -202 => Some("CS_END_RESULTS"),
        -203 => Some("CS_END_ITEM"),
        -204 => Some("CS_NOMSG"),
        -205 => Some("CS_TIMED_OUT"),
        _ => None,
    }
}
