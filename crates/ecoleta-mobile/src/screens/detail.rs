// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Detail screen: one point with its accepted items and contact actions.
//!
//! | State | View |
//! |-------|------|
//! | [`DetailState::Loading`] | [`DetailView::Loading`], nothing to show |
//! | [`DetailState::Loaded`] | [`DetailView::Loaded`] with a [`PointCard`] |
//! | [`DetailState::Failed`] | [`DetailView::Failed`] with the error message |

use ecoleta_core::{PointDetail, PointView};
use reqwest::Url;

use crate::{api::ClientError, platform::MailDraft};

/// Message prefilled in the WhatsApp conversation.
pub const WHATSAPP_TEXT: &str = "Tenho interesse sobre a coleta de resíduos";

/// Subject of the mail draft.
pub const MAIL_SUBJECT: &str = "Interesse na coleta de resíduos";

/// Detail screen state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    /// Fetch in progress.
    #[default]
    Loading,
    /// Point fetched.
    Loaded(PointDetail),
    /// Fetch failed with the given message.
    Failed(String)
}

impl DetailState {
    /// The fetched point, if any.
    pub fn detail(&self) -> Option<&PointDetail> {
        match self {
            Self::Loaded(detail) => Some(detail),
            _ => None
        }
    }
}

/// Content of a loaded point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCard {
    /// Point photo.
    pub image_url: String,
    /// Point name.
    pub name:      String,
    /// Item titles joined with `", "`.
    pub items:     String,
    /// `city-uf`.
    pub address:   String
}

/// Everything the detail screen draws.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    /// Nothing to show yet.
    Loading,
    /// The point card with contact buttons.
    Loaded(PointCard),
    /// Visible error in place of the card.
    Failed {
        /// Human readable cause.
        message: String
    }
}

impl DetailView {
    /// The point card when loaded.
    pub fn card(&self) -> Option<&PointCard> {
        match self {
            Self::Loaded(card) => Some(card),
            _ => None
        }
    }
}

/// Contact action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    /// Open a WhatsApp conversation.
    Whatsapp,
    /// Open the mail composer.
    Email
}

/// Build the view model from state.
pub fn render(state: &DetailState) -> DetailView {
    match state {
        DetailState::Loading => DetailView::Loading,
        DetailState::Failed(message) => DetailView::Failed {
            message: format!("Não foi possível carregar o ponto: {message}")
        },
        DetailState::Loaded(PointDetail {
            point,
            items
        }) => DetailView::Loaded(PointCard {
            image_url: point.image_url.clone(),
            name:      point.name.clone(),
            items:     items
                .iter()
                .map(|item| item.title.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            address:   format!("{}-{}", point.city, point.uf)
        })
    }
}

/// `whatsapp://send` deep link with the fixed interest message.
pub fn whatsapp_link(point: &PointView) -> Result<Url, ClientError> {
    Url::parse_with_params("whatsapp://send", &[
        ("phone", point.whatsapp.as_str()),
        ("text", WHATSAPP_TEXT)
    ])
    .map_err(|e| ClientError::InvalidUrl(e.to_string()))
}

/// Mail composer draft addressed to the point.
pub fn mail_draft(point: &PointView) -> MailDraft {
    MailDraft {
        subject:    MAIL_SUBJECT.to_string(),
        recipients: vec![point.email.clone()]
    }
}
