use lodbrowse_model::{NativeValue, Term};
use lodbrowse_results::Solution;

/// Returns whether the predicate `p` of `solution` is one of `predicates`.
///
/// Predicates are configured without delimiters and compared against the canonical form.
fn has_predicate(solution: &Solution, predicates: &[String]) -> bool {
    let Some(predicate) = solution.get("p") else {
        return false;
    };
    let canonical = predicate.canonical_form();
    predicates.iter().any(|candidate| {
        canonical
            .strip_prefix('<')
            .and_then(|inner| inner.strip_suffix('>'))
            .is_some_and(|inner| inner == candidate)
    })
}

/// Finds the title of a resource among the rows describing it.
///
/// Returns the object `o` of the first row whose predicate is one of `title_predicates`, as native
/// text. Blank objects have no native value and yield their canonical form. Returns `None` if no
/// title predicate is configured or none matches.
pub fn find_title(title_predicates: &[String], solutions: &[Solution]) -> Option<String> {
    if title_predicates.is_empty() {
        return None;
    }
    solutions
        .iter()
        .filter(|solution| has_predicate(solution, title_predicates))
        .find_map(|solution| solution.get("o"))
        .map(|object| match object.native_value() {
            Some(value) => value.to_string(),
            None => object.canonical_form(),
        })
}

/// Collects up to `max_count` image URLs from the rows describing a resource.
///
/// Rows are consumed lazily and scanning stops once `max_count` images are found. URI objects
/// contribute their value, literal objects their lexical form. Blank objects are skipped.
pub fn find_images<'solution>(
    image_predicates: &[String],
    solutions: impl IntoIterator<Item = &'solution Solution>,
    max_count: usize,
    show_images: bool,
) -> Vec<String> {
    if !show_images || max_count == 0 {
        return Vec::new();
    }
    solutions
        .into_iter()
        .filter(|solution| has_predicate(solution, image_predicates))
        .filter_map(|solution| image_url(solution.get("o")?))
        .take(max_count)
        .collect()
}

fn image_url(object: &Term) -> Option<String> {
    match object {
        Term::Uri(uri) => Some(uri.as_str().to_owned()),
        Term::Literal(literal) => Some(match literal.value() {
            NativeValue::String(value) => value.clone(),
            value => value.to_string(),
        }),
        Term::Blank(_) => None,
    }
}
