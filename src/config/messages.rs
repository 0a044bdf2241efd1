//! Localized messages returned to API callers.
//!
//! Every user-facing string lives in [`Messages`] and is looked up by
//! [`MessageKind`]. Defaults are Brazilian Portuguese; any entry can be
//! replaced from the `[messages]` table of config.toml.

use serde::Deserialize;

/// The situations that produce a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Item path identifier is not a number
    ItemIdRequired,
    /// Item path identifier is zero or negative
    ItemIdInvalid,
    /// No item with the requested identifier
    ItemNotFound,
    /// Invoice path identifier is not a number
    InvoiceIdRequired,
    /// Invoice path identifier is zero or negative
    InvoiceIdInvalid,
    /// Unexpected storage failure
    InternalError,
}

/// Message table, one entry per [`MessageKind`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Text for [`MessageKind::ItemIdRequired`]
    pub item_id_required: String,
    /// Text for [`MessageKind::ItemIdInvalid`]
    pub item_id_invalid: String,
    /// Text for [`MessageKind::ItemNotFound`]
    pub item_not_found: String,
    /// Text for [`MessageKind::InvoiceIdRequired`]
    pub invoice_id_required: String,
    /// Text for [`MessageKind::InvoiceIdInvalid`]
    pub invoice_id_invalid: String,
    /// Text for [`MessageKind::InternalError`]
    pub internal_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            item_id_required: "ID do item é obrigatório".to_string(),
            item_id_invalid: "ID do item inválido".to_string(),
            item_not_found: "Item não encontrado".to_string(),
            invoice_id_required: "ID da nota é obrigatório".to_string(),
            invoice_id_invalid: "ID da nota fiscal inválido".to_string(),
            internal_error: "Erro interno do servidor".to_string(),
        }
    }
}

impl Messages {
    /// Returns the configured text for `kind`.
    #[must_use]
    pub fn get(&self, kind: MessageKind) -> &str {
        match kind {
            MessageKind::ItemIdRequired => &self.item_id_required,
            MessageKind::ItemIdInvalid => &self.item_id_invalid,
            MessageKind::ItemNotFound => &self.item_not_found,
            MessageKind::InvoiceIdRequired => &self.invoice_id_required,
            MessageKind::InvoiceIdInvalid => &self.invoice_id_invalid,
            MessageKind::InternalError => &self.internal_error,
        }
    }
}
