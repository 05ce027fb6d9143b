//! Terminal rendering of the current readout.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use odlens_core::{Calculator, DISPLAY_DIGITS, UNKNOWN, format_sig};
use odlens_model::FieldId;

/// Build the readout table: the five fields plus the derived display rows.
pub fn readout_table(calc: &Calculator) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Quantity"),
        header_cell("Value"),
        header_cell("Unit"),
        header_cell("Role"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    let derived = [
        calc.solve_mode().derived_field(),
        calc.aperture_mode().derived_field(),
    ];
    for field in FieldId::all() {
        table.add_row(vec![
            Cell::new(field.display_name()),
            text_cell(calc.field_text(*field).trim()),
            unit_cell(field.unit()),
            role_cell(derived.contains(field)),
        ]);
    }

    let readout = calc.readout();
    table.add_row(vec![
        Cell::new("half field angle"),
        number_cell(readout.optical.half_angle_deg),
        unit_cell("°"),
        dim_cell(""),
    ]);
    table.add_row(vec![
        Cell::new("half image size"),
        number_cell(readout.optical.half_image),
        unit_cell("mm"),
        dim_cell(""),
    ]);
    table.add_row(vec![
        Cell::new("relative aperture"),
        text_cell(&readout.relative_aperture_text()),
        unit_cell(""),
        dim_cell(""),
    ]);
    table.add_row(vec![
        Cell::new("pupil area"),
        number_cell(readout.aperture.pupil_area),
        unit_cell("mm²"),
        dim_cell(""),
    ]);
    table
}

/// Print the readout table to stdout.
pub fn print_readout(calc: &Calculator) {
    println!("{}", readout_table(calc));
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(72);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn text_cell(text: &str) -> Cell {
    if text.is_empty() || text == UNKNOWN {
        dim_cell(UNKNOWN)
    } else {
        Cell::new(text)
    }
}

fn number_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) => Cell::new(format_sig(v, DISPLAY_DIGITS)),
        None => dim_cell(UNKNOWN),
    }
}

fn unit_cell(unit: &str) -> Cell {
    dim_cell(unit)
}

fn role_cell(derived: bool) -> Cell {
    if derived {
        Cell::new("derived")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("input")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
