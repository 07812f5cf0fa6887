// SPDX-License-Identifier: MIT

//! Chip-list editor used for brand tags and product categories.
//!
//! Whitespace-only entries are never stored; duplicates (case-sensitive
//! exact match) are silently ignored rather than erroring.

use eframe::egui;

/// UI model for one chip list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagListModel {
    items: Vec<String>,
    input: String,
}

impl TagListModel {
    pub fn from_items(items: Vec<String>) -> Self {
        Self {
            items,
            input: String::new(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

/// Messages emitted by the chip-list view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagListMsg {
    InputChanged(String),
    AddRequested,
    Remove(usize),
}

/// Apply a message to the model.
pub fn update(model: &mut TagListModel, msg: TagListMsg) {
    match msg {
        TagListMsg::InputChanged(text) => model.input = text,
        TagListMsg::AddRequested => {
            let trimmed = model.input.trim();
            if !trimmed.is_empty() && !model.items.iter().any(|item| item == trimmed) {
                model.items.push(trimmed.to_string());
            }
            model.input.clear();
        }
        TagListMsg::Remove(index) => {
            if index < model.items.len() {
                model.items.remove(index);
            }
        }
    }
}

/// Render the input row and chips; returns messages triggered by the user.
pub fn view(
    ui: &mut egui::Ui,
    id_salt: &str,
    label: &str,
    hint: &str,
    model: &TagListModel,
) -> Vec<TagListMsg> {
    let mut msgs = Vec::new();

    ui.label(label);
    ui.horizontal(|ui| {
        let mut buffer = model.input.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut buffer)
                .id_salt(id_salt)
                .hint_text(hint)
                .desired_width(220.0),
        );
        if response.changed() {
            msgs.push(TagListMsg::InputChanged(buffer));
        }
        // Add on Enter as well as via the button.
        if response.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
            msgs.push(TagListMsg::AddRequested);
        }
        if ui
            .button(format!("{} Add", egui_phosphor::regular::PLUS))
            .clicked()
        {
            msgs.push(TagListMsg::AddRequested);
        }
    });

    ui.horizontal_wrapped(|ui| {
        if model.items.is_empty() {
            ui.label(
                egui::RichText::new("None yet.")
                    .italics()
                    .color(egui::Color32::from_gray(110)),
            );
            return;
        }
        for (index, item) in model.items.iter().enumerate() {
            ui.group(|ui| {
                ui.label(item);
                if ui
                    .button(
                        egui::RichText::new(egui_phosphor::regular::X)
                            .small()
                            .color(egui::Color32::from_gray(140)),
                    )
                    .on_hover_text("Remove")
                    .clicked()
                {
                    msgs.push(TagListMsg::Remove(index));
                }
            });
        }
    });

    msgs
}
