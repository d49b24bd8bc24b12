// Chunk: docs/chunks/hue_tinted_highlights - Plugin facade wiring both tinting paths

//! The plugin as the host sees it.
//!
//! The host loads the plugin once with its stored settings blob, opens a
//! [`DocumentView`] per editor and runs [`HueMarkPlugin::post_process`] over
//! each block it renders in reading mode. Both paths read the same settings,
//! so a highlight gets the same hue in either mode.

use hue_mark_decor::DocumentView;

use crate::post_process::post_process_html;
use crate::settings::HighlightSettings;

#[derive(Debug, Clone, Default)]
pub struct HueMarkPlugin {
    settings: HighlightSettings,
}

impl HueMarkPlugin {
    pub fn new(settings: HighlightSettings) -> Self {
        tracing::debug!(
            digest = settings.digest.as_str(),
            tint_delimiters = settings.tint_delimiters,
            "hue-mark plugin loaded"
        );
        Self { settings }
    }

    /// Loads the plugin from the host's stored settings blob.
    ///
    /// An unusable blob falls back to the defaults.
    pub fn from_data(json: &str) -> Self {
        Self::new(HighlightSettings::load_or_default(json))
    }

    pub fn settings(&self) -> &HighlightSettings {
        &self.settings
    }

    /// Replaces the settings. Views opened earlier keep their old config.
    pub fn set_settings(&mut self, settings: HighlightSettings) {
        self.settings = settings;
    }

    /// Opens a live view on one editor's text.
    pub fn open_view(&self, text: &str) -> DocumentView {
        DocumentView::new(text, self.settings.tint_config())
    }

    /// Tints the `<mark>` elements of one rendered block.
    pub fn post_process(&self, html: &str) -> String {
        post_process_html(html, self.settings.digest)
    }
}
