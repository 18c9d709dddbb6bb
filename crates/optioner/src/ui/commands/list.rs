use comfy_table::{Attribute, Cell, ContentArrangement, Row, Table};
use optioner::{
  generator::{GeneratorConfig, OptionSpec, orchestrator::Orchestrator},
  utils::SourceLoader,
};

use crate::ui::{Colors, ListCommand, colors::IntoComfyColor, term_width};

const EXCLUDED: &str = "(excluded)";

/// One table row: field, type, annotation and setter.
fn field_rows(spec: &OptionSpec) -> Vec<[String; 4]> {
  spec
    .fields()
    .iter()
    .map(|field| {
      let record = field.record();
      let annotation = record
        .raw_annotation
        .as_deref()
        .map_or_else(String::new, |value| format!("opt = {value:?}"));
      let setter = field
        .setter()
        .map_or_else(|| EXCLUDED.to_string(), |setter| setter.ident.to_string());
      [
        record.declared_name.clone(),
        record.type_spelling.clone(),
        annotation,
        setter,
      ]
    })
    .collect()
}

pub async fn list_fields(command: ListCommand, colors: &Colors) -> anyhow::Result<()> {
  let unit = SourceLoader::load(&command.input).await?;
  let config = GeneratorConfig::builder()
    .type_name(command.type_name)
    .naming(command.naming.into())
    .build();
  let planned = Orchestrator::new(config).plan(&unit)?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in ["FIELD", "TYPE", "ANNOTATION", "SETTER"] {
    row.add_cell(Cell::new(header).fg(IntoComfyColor::into(colors.label())));
  }
  table.set_header(row);

  for [field, ty, annotation, setter] in field_rows(&planned.spec) {
    let setter_color = if setter == EXCLUDED {
      colors.accent()
    } else {
      colors.value()
    };

    let mut row = Row::new();
    row.add_cell(Cell::new(field).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(Cell::new(ty).fg(IntoComfyColor::into(colors.info())));
    row.add_cell(Cell::new(annotation).fg(IntoComfyColor::into(colors.timestamp())));
    row.add_cell(
      Cell::new(setter)
        .fg(IntoComfyColor::into(setter_color))
        .add_attribute(Attribute::Bold),
    );
    table.add_row(row);
  }

  println!(
    "{} declared in {}",
    planned.spec.target_type_name(),
    planned.source_file.display()
  );
  println!("{table}");

  Ok(())
}
