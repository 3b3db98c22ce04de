use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{
    ast::{Endpoint, EndpointCatalog},
    codegen::SignatureFragment,
  },
  ui::{Colors, colors::to_comfy, term_width},
  utils::EndpointLoader,
};

/// Endpoint table rows: name, method, path, helper arguments, reply.
fn endpoint_rows(catalog: EndpointCatalog) -> Vec<[String; 5]> {
  catalog
    .into_sorted()
    .into_iter()
    .map(|Endpoint { name, spec }| {
      let arguments = SignatureFragment::new(&spec).to_string();
      [name, spec.method, spec.path, arguments, spec.response_type.to_string()]
    })
    .collect()
}

pub async fn list_endpoints(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let catalog = EndpointLoader::open(input).await?.parse()?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["NAME", "METHOD", "PATH", "ARGUMENTS", "REPLY"] {
    header.add_cell(Cell::new(title).fg(to_comfy(colors.label())));
  }
  table.set_header(header);

  for [name, method, path, arguments, reply] in endpoint_rows(catalog) {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(name)
        .fg(to_comfy(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(method)
        .fg(to_comfy(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(path).fg(to_comfy(colors.primary())));
    row.add_cell(Cell::new(arguments).fg(to_comfy(colors.info())));
    row.add_cell(Cell::new(reply).fg(to_comfy(colors.success())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_endpoint_rows_sorted_with_arguments() {
    let catalog: EndpointCatalog = serde_json::from_str(
      r#"{
        "WriteKV": {"method": "PUT", "path": "/v1/kv/%s", "pathParameters": ["key"], "bodyType": "string", "responseType": "json"},
        "Leader": {"method": "GET", "path": "/v1/status/leader"}
      }"#,
    )
    .unwrap();

    let rows = endpoint_rows(catalog);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], [
      "Leader".to_string(),
      "GET".to_string(),
      "/v1/status/leader".to_string(),
      "status int".to_string(),
      "none".to_string(),
    ]);
    assert_eq!(rows[1][0], "WriteKV");
    assert_eq!(rows[1][3], "key string, body []byte, status int, reply interface{}");
    assert_eq!(rows[1][4], "json");
  }
}
