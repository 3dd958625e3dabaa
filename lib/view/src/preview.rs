use crate::{escape_html, Markup, NamespaceDictionary};
use lodbrowse_results::Solution;

/// Renders the literal preview shown in the tooltip of resource links.
///
/// Each solution becomes one table row holding its predicate `p`, compressed with `namespaces`
/// when given, and its object `o` in canonical form. Missing bindings render as empty cells.
pub fn literal_table(namespaces: Option<&NamespaceDictionary>, solutions: &[Solution]) -> Markup {
    let mut html = String::from("<table class='preview'>");
    for solution in solutions {
        let predicate = solution
            .get("p")
            .map(|term| {
                let canonical = term.canonical_form();
                match namespaces {
                    Some(namespaces) => namespaces.prefixify(&canonical),
                    None => canonical,
                }
            })
            .unwrap_or_default();
        let object = solution
            .get("o")
            .map(|term| term.canonical_form())
            .unwrap_or_default();

        html.push_str("<tr><td>");
        html.push_str(&escape_html(&predicate));
        html.push_str("</td><td>");
        html.push_str(&escape_html(&object));
        html.push_str("</td></tr>");
    }
    html.push_str("</table>");
    Markup::from_trusted(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodbrowse_model::{Literal, Term, Uri};

    fn solutions() -> Vec<Solution> {
        vec![
            [
                ("p", Term::from(Uri::new("http://purl.org/dc/terms/title"))),
                ("o", Term::from(Literal::new_language_tagged("Sult", "no"))),
            ]
            .into_iter()
            .collect(),
            [
                ("p", Term::from(Uri::new("http://example.org/note"))),
                ("o", Term::from(Literal::new_simple("<b>bold</b> & 'quoted'"))),
            ]
            .into_iter()
            .collect(),
        ]
    }

    #[test]
    fn preview_with_namespaces() {
        let namespaces = NamespaceDictionary::new([("dc", "http://purl.org/dc/terms/")]);
        let table = literal_table(Some(&namespaces), &solutions());
        insta::assert_snapshot!(table, @"<table class='preview'><tr><td>dc:title</td><td>Sult@no</td></tr><tr><td>&lt;http://example.org/note&gt;</td><td>&lt;b&gt;bold&lt;/b&gt; &amp; &#39;quoted&#39;</td></tr></table>");
    }

    #[test]
    fn preview_without_namespaces() {
        let table = literal_table(None, &solutions()[..1]);
        assert_eq!(
            table.as_str(),
            "<table class='preview'><tr><td>&lt;http://purl.org/dc/terms/title&gt;</td><td>Sult@no</td></tr></table>"
        );
    }

    #[test]
    fn empty_preview() {
        assert_eq!(
            literal_table(None, &[]).as_str(),
            "<table class='preview'></table>"
        );
    }
}
