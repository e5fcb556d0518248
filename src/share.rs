//! Share flow: pick one collected color and export it as a palette card.

use chrono::NaiveDate;
use std::path::Path;

use huestep_canvas::{
    export_filename, CardInteraction, CardRequest, DragState, PaletteCardLayout,
    PaletteCompositor, PointerEvent, RenderResult,
};
use image::RgbaImage;

use crate::config::RenderSettings;
use crate::model::CollectedColor;
use crate::report::format_display_date;

/// Name shown on a fresh card.
pub const DEFAULT_COLOR_NAME: &str = "My Color";

/// One share dialog: selected photo, editable name and card transform.
pub struct ShareSession {
    colors: Vec<CollectedColor>,
    selected: usize,
    color_name: String,
    date: NaiveDate,
    layout: PaletteCardLayout,
    interaction: CardInteraction,
    compositor: PaletteCompositor,
}

impl ShareSession {
    /// `None` when there is nothing to share. The preview frame size and the
    /// initial card name come from `settings`.
    pub fn new(
        colors: Vec<CollectedColor>,
        date: NaiveDate,
        settings: &RenderSettings,
    ) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        Some(Self {
            colors,
            selected: 0,
            color_name: settings.default_color_name.clone(),
            date,
            layout: PaletteCardLayout::new(settings.preview_size.max(1) as f32),
            interaction: CardInteraction::new(),
            compositor: PaletteCompositor::new(),
        })
    }

    pub fn with_color_name(mut self, name: impl Into<String>) -> Self {
        self.set_color_name(name);
        self
    }

    pub fn colors(&self) -> &[CollectedColor] {
        &self.colors
    }

    pub fn selected(&self) -> &CollectedColor {
        // `new` rejects empty lists and `select` keeps the index in range.
        &self.colors[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Switch photos. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.colors.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn color_name(&self) -> &str {
        &self.color_name
    }

    pub fn set_color_name(&mut self, name: impl Into<String>) {
        self.color_name = name.into();
    }

    pub fn layout(&self) -> &PaletteCardLayout {
        &self.layout
    }

    pub fn drag_state(&self) -> DragState {
        self.interaction.state()
    }

    /// Feed a pointer or wheel event in preview coordinates.
    pub fn handle(&mut self, event: PointerEvent) {
        self.interaction.handle(&mut self.layout, event);
    }

    pub fn zoom_in(&mut self) {
        self.layout.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.layout.zoom_out();
    }

    pub fn grow_card(&mut self) {
        self.layout.grow_card();
    }

    pub fn shrink_card(&mut self) {
        self.layout.shrink_card();
    }

    /// Zoom 1, no pan, default card scale and position.
    pub fn reset_transforms(&mut self) {
        self.layout.reset();
    }

    pub fn date_label(&self) -> String {
        format_display_date(self.date)
    }

    /// Render the card at `pixel_size`. The preview uses the frame size and
    /// the export [`huestep_canvas::EXPORT_SIZE`].
    pub fn render(&mut self, pixel_size: u32) -> RenderResult<RgbaImage> {
        let date_label = self.date_label();
        let selected = &self.colors[self.selected];
        let request = CardRequest {
            image: &selected.image_source,
            color: selected.color,
            layout: &self.layout,
            color_name: &self.color_name,
            date_label: &date_label,
        };
        self.compositor.render(&request, pixel_size)
    }

    pub fn render_preview(&mut self) -> RenderResult<RgbaImage> {
        self.render(self.layout.frame_size() as u32)
    }

    /// PNG bytes of the card, normally at [`huestep_canvas::EXPORT_SIZE`].
    pub fn export_png(&mut self, pixel_size: u32) -> RenderResult<Vec<u8>> {
        let date_label = self.date_label();
        let selected = &self.colors[self.selected];
        let request = CardRequest {
            image: &selected.image_source,
            color: selected.color,
            layout: &self.layout,
            color_name: &self.color_name,
            date_label: &date_label,
        };
        self.compositor.export_png(&request, pixel_size)
    }

    /// Export and write the PNG to `path`.
    pub fn save_png(&mut self, pixel_size: u32, path: &Path) -> RenderResult<()> {
        let png = self.export_png(pixel_size)?;
        std::fs::write(path, png)?;
        log::info!("Saved palette card to {}", path.display());
        Ok(())
    }

    /// `palette-YYYY-MM-DD.png`
    pub fn export_filename(&self) -> String {
        export_filename(&self.date.format("%Y-%m-%d").to_string())
    }
}
