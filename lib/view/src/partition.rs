use crate::{escape_html, DisplayRow, DisplayValue, Markup, ViewConfig};
use lodbrowse_model::Term;
use lodbrowse_results::Solution;

/// Variables that are never rendered as links, even if they point into the dataset.
const UNLINKED_VARIABLES: [&str; 2] = ["g", "p"];

/// The position of the browsed resource in the triples of a row.
///
/// The browse query unions `<uri> ?p ?o` with `?s ?p <uri>`. Rows of the first pattern bind
/// `?o` and leave `?s` unbound, rows of the second bind `?s` and leave `?o` unbound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The resource is the subject of the row's triple.
    Subject,
    /// The resource is the object of the row's triple.
    Object,
}

impl Role {
    /// The variable whose binding decides whether a row belongs to this role.
    ///
    /// Note that this is the variable on the *other* side of the triple: subject rows are
    /// recognised by a bound `?o`.
    pub fn gate_variable(self) -> &'static str {
        match self {
            Role::Subject => "o",
            Role::Object => "s",
        }
    }
}

/// Keeps the solutions in which `key` is bound and renders all their bindings.
///
/// `key` names the variable that must be bound for a row to be kept, not the variable that is
/// rejected. See [`Role::gate_variable`] for the mapping used by the role partitions.
pub fn reject_where_unbound(
    key: &str,
    solutions: &[Solution],
    config: &ViewConfig,
) -> Vec<DisplayRow> {
    solutions
        .iter()
        .filter(|solution| solution.contains(key))
        .map(|solution| {
            solution
                .iter()
                .map(|(variable, term)| (variable.clone(), render_term(variable, term, config)))
                .collect()
        })
        .collect()
}

fn render_term(variable: &str, term: &Term, config: &ViewConfig) -> DisplayValue {
    let text = config.display_text(&term.canonical_form());
    if UNLINKED_VARIABLES.contains(&variable) {
        return DisplayValue::Text(text);
    }
    match local_path(term, &config.base_uri) {
        Some(path) => DisplayValue::Markup(resource_link(path, &text, config.fetch_literals)),
        None => DisplayValue::Text(text),
    }
}

/// Returns the path of `term` below `base_uri`, if `term` is a URI inside the dataset.
fn local_path<'term>(term: &'term Term, base_uri: &str) -> Option<&'term str> {
    if base_uri.is_empty() {
        return None;
    }
    term.as_uri()?
        .as_str()
        .strip_prefix(base_uri)
        .map(|path| path.trim_start_matches('/'))
}

fn resource_link(path: &str, label: &str, with_tooltip: bool) -> Markup {
    let path = escape_html(path);
    let label = escape_html(label);
    Markup::from_trusted(if with_tooltip {
        format!(
            "<div class='relative'><a class=\"resource-link\" href='/{path}'>{label}</a>\
             <div class=\"tooltip\"><strong>{label}</strong><div class='literals'>...</div></div></div>"
        )
    } else {
        format!("<a href='/{path}'>{label}</a>")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NamespaceDictionary;
    use lodbrowse_model::{BlankNode, Literal, Uri};

    const BASE: &str = "http://data.example.org";

    fn config() -> ViewConfig {
        ViewConfig {
            namespaces: Some(NamespaceDictionary::new([(
                "dc",
                "http://purl.org/dc/terms/",
            )])),
            ..ViewConfig::new(BASE)
        }
    }

    fn solutions() -> Vec<Solution> {
        vec![
            [
                ("g", Term::from(Uri::new("http://data.example.org/graph"))),
                ("p", Term::from(Uri::new("http://purl.org/dc/terms/title"))),
                ("o", Term::from(Literal::new_language_tagged("Sult", "no"))),
            ]
            .into_iter()
            .collect(),
            [
                ("g", Term::from(Uri::new("http://data.example.org/graph"))),
                ("p", Term::from(Uri::new("http://purl.org/dc/terms/creator"))),
                ("o", Term::from(Uri::new("http://data.example.org/person/hamsun"))),
            ]
            .into_iter()
            .collect(),
            [
                ("g", Term::from(Uri::new("http://data.example.org/graph"))),
                ("s", Term::from(BlankNode::new("b0"))),
                ("p", Term::from(Uri::new("http://purl.org/dc/terms/subject"))),
            ]
            .into_iter()
            .collect(),
            Solution::new(),
        ]
    }

    #[test]
    fn role_gates_on_the_other_variable() {
        assert_eq!(Role::Subject.gate_variable(), "o");
        assert_eq!(Role::Object.gate_variable(), "s");
    }

    #[test]
    fn rows_without_the_key_are_rejected() {
        let solutions = solutions();
        let config = config();

        let with_object = reject_where_unbound("o", &solutions, &config);
        assert_eq!(with_object.len(), 2);
        assert!(with_object.iter().all(|row| row.contains_key("o")));

        let with_subject = reject_where_unbound("s", &solutions, &config);
        assert_eq!(with_subject.len(), 1);
        assert_eq!(
            with_subject[0].get("s"),
            Some(&DisplayValue::Text("_:b0".to_owned()))
        );
    }

    #[test]
    fn dataset_uris_become_links() {
        let rows = reject_where_unbound("o", &solutions(), &config());

        assert_eq!(
            rows[1].get("o"),
            Some(&DisplayValue::Markup(Markup::from_trusted(
                "<a href='/person/hamsun'>&lt;http://data.example.org/person/hamsun&gt;</a>"
            )))
        );
    }

    #[test]
    fn graph_and_predicate_are_never_links() {
        let rows = reject_where_unbound("o", &solutions(), &config());

        assert_eq!(
            rows[0].get("g"),
            Some(&DisplayValue::Text(
                "<http://data.example.org/graph>".to_owned()
            ))
        );
        assert_eq!(
            rows[0].get("p"),
            Some(&DisplayValue::Text("dc:title".to_owned()))
        );
        assert_eq!(
            rows[0].get("o"),
            Some(&DisplayValue::Text("Sult@no".to_owned()))
        );
    }

    #[test]
    fn without_namespaces_canonical_text_is_kept() {
        let config = ViewConfig::new(BASE);
        let rows = reject_where_unbound("o", &solutions(), &config);

        assert_eq!(
            rows[0].get("p"),
            Some(&DisplayValue::Text(
                "<http://purl.org/dc/terms/title>".to_owned()
            ))
        );
    }

    #[test]
    fn empty_base_uri_disables_links() {
        let config = ViewConfig::default();
        let rows = reject_where_unbound("o", &solutions(), &config);

        assert!(rows
            .iter()
            .flat_map(|row| row.values())
            .all(|value| !value.is_markup()));
    }

    #[test]
    fn tooltip_link() {
        let link = resource_link("person/hamsun", "<http://data.example.org/person/hamsun>", true);
        insta::assert_snapshot!(link, @r#"<div class='relative'><a class="resource-link" href='/person/hamsun'>&lt;http://data.example.org/person/hamsun&gt;</a><div class="tooltip"><strong>&lt;http://data.example.org/person/hamsun&gt;</strong><div class='literals'>...</div></div></div>"#);
    }
}
