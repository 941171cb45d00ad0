//! Sortable station table

use egui::{Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use synop_core::{columns, SortDirection, SortSpec};

use crate::adapters::table::TableRow;

/// Emitted when the user clicks a sortable header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    SortBy(&'static str),
}

const TABLE_COLUMNS: [(&str, &str); 7] = [
    (columns::NAME, "Stacja"),
    (columns::TEMPERATURE, "Temperatura"),
    (columns::HUMIDITY, "Wilgotność"),
    (columns::PRESSURE, "Ciśnienie"),
    (columns::WIND_SPEED, "Wiatr"),
    (columns::PRECIPITATION, "Opady"),
    (columns::MEASURED_AT, "Data pomiaru"),
];

/// Render the filtered+sorted view, one row per reading. Returns the sort
/// request when a header was clicked; the controller owns the actual sort.
pub fn ui(ui: &mut Ui, rows: &[TableRow], sort: Option<&SortSpec>) -> Option<TableAction> {
    let mut action = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::initial(130.0).at_least(70.0).clip(true), TABLE_COLUMNS.len())
        .header(22.0, |mut header| {
            for (id, title) in TABLE_COLUMNS {
                header.col(|ui| {
                    let label = match sort {
                        Some(spec) if spec.field == id => {
                            let arrow = match spec.direction {
                                SortDirection::Ascending => "▲",
                                SortDirection::Descending => "▼",
                            };
                            format!("{title} {arrow}")
                        }
                        _ => title.to_string(),
                    };
                    if ui.button(RichText::new(label).strong()).clicked() {
                        action = Some(TableAction::SortBy(id));
                    }
                });
            }
        })
        .body(|mut body| {
            for row in rows {
                body.row(18.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(&row.name);
                    });
                    table_row.col(|ui| {
                        ui.label(
                            RichText::new(format!("{}°C", row.temperature))
                                .color(row.temp_bucket.color()),
                        );
                    });
                    table_row.col(|ui| {
                        ui.label(format!("{}%", row.humidity));
                    });
                    table_row.col(|ui| {
                        ui.label(format!("{} hPa", row.pressure));
                    });
                    table_row.col(|ui| {
                        ui.label(format!("{} m/s", row.wind_speed));
                    });
                    table_row.col(|ui| {
                        ui.label(format!("{} mm", row.precipitation));
                    });
                    table_row.col(|ui| {
                        ui.label(&row.measured_at);
                    });
                });
            }
        });

    if rows.is_empty() {
        ui.add_space(8.0);
        ui.weak("Brak stacji pasujących do filtra");
    }

    action
}
