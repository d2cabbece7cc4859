/**
 * query.rs
 * SPARQL CONSTRUCT builders for terms, relations and vocabularies
 *
 * Builders never execute anything and never fail: every caller-supplied IRI is
 * rendered through `bind_iri`, so a malformed identifier produces a query that
 * matches nothing instead of a broken (or injected) query.
 */

use std::fmt;
use std::fmt::Write as _;

use tracing::{debug, warn};

use super::schema::Schema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparqlQuery {
    query: String,
}

impl SparqlQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }

    pub fn into_string(self) -> String {
        self.query
    }

    /// Relations of a term acting as domain or range of other terms
    ///
    /// One `BIND` anchors `?term`; six union blocks cover both modelling
    /// idioms (plain `rdfs:domain`/`rdfs:range` and existential restrictions
    /// on the two relational roles) from both sides:
    ///
    /// 1. restriction on element-1 filled by the term
    /// 2. property with the term as `rdfs:domain`
    /// 3. property with the term as `rdfs:range`
    /// 4. concept pointing at the term through element-1
    /// 5. concept pointing at the term through element-2
    /// 6. restriction on element-2 filled by the term
    pub fn term_relations(schema: &Schema, term_iri: &str) -> Self {
        let term = bind_iri(term_iri);
        let Iris {
            concept,
            pref_label,
            domain,
            range,
            sub_class_of,
            some_values_from,
            on_property,
            in_vocabulary,
            related_element_1,
            related_element_2,
            ..
        } = Iris::from_schema(schema);

        debug!(term = term_iri, "building term relations query");

        Self::new(format!(
            r#"CONSTRUCT {{
  ?term a {concept} .
  ?term {domain} ?domain .
  ?domain {in_vocabulary} ?vocabulary .
  ?domain a {concept} ; {pref_label} ?label .
  ?term {range} ?range .
  ?range {in_vocabulary} ?vocabulary2 .
  ?range a {concept} ; {pref_label} ?label2 .
}}
WHERE {{
  BIND({term} AS ?term)
  {{
    ?domain {sub_class_of} ?domainRestriction .
    ?domainRestriction {some_values_from} ?term ; {on_property} {related_element_1} .
    ?domain {pref_label} ?label .
    ?domain {in_vocabulary} ?vocabulary .
  }}
  UNION {{
    ?domain {domain} ?term .
    ?domain {pref_label} ?label .
    ?domain {in_vocabulary} ?vocabulary .
  }}
  UNION {{
    ?range {range} ?term .
    ?range {pref_label} ?label2 .
    ?range {in_vocabulary} ?vocabulary2 .
  }}
  UNION {{
    ?domain {related_element_1} ?term .
    ?domain {pref_label} ?label .
    ?domain {in_vocabulary} ?vocabulary .
  }}
  UNION {{
    ?range {related_element_2} ?term .
    ?range {pref_label} ?label2 .
    ?range {in_vocabulary} ?vocabulary2 .
  }}
  UNION {{
    ?range {sub_class_of} ?rangeRestriction .
    ?rangeRestriction {some_values_from} ?term ; {on_property} {related_element_2} .
    ?range {pref_label} ?label2 .
    ?range {in_vocabulary} ?vocabulary2 .
  }}
}}
"#
        ))
    }

    /// Domain and range of a property
    ///
    /// The property is bound as both the `?domain` and the `?range` anchor;
    /// each side is found either directly (`rdfs:domain` / `rdfs:range`) or
    /// through a restriction on the matching relational role.
    pub fn property_relations(schema: &Schema, property_iri: &str) -> Self {
        let property = bind_iri(property_iri);
        let Iris {
            concept,
            pref_label,
            domain,
            range,
            sub_class_of,
            some_values_from,
            on_property,
            in_vocabulary,
            related_element_1,
            related_element_2,
            ..
        } = Iris::from_schema(schema);

        debug!(property = property_iri, "building property relations query");

        Self::new(format!(
            r#"CONSTRUCT {{
  ?domain a {concept} .
  ?domain {domain} ?term .
  ?term a {concept} ; {pref_label} ?label .
  ?term {in_vocabulary} ?vocabulary .
  ?range {range} ?term2 .
  ?term2 a {concept} ; {pref_label} ?label2 .
  ?term2 {in_vocabulary} ?vocabulary2 .
}}
WHERE {{
  BIND({property} AS ?domain)
  BIND({property} AS ?range)
  {{
    ?domain {sub_class_of} ?domainRestriction .
    ?domainRestriction {some_values_from} ?term ; {on_property} {related_element_1} .
    ?term {pref_label} ?label .
    ?term {in_vocabulary} ?vocabulary .
  }}
  UNION {{
    ?domain {domain} ?term .
    ?term {pref_label} ?label .
    ?term {in_vocabulary} ?vocabulary .
  }}
  UNION {{
    ?range {range} ?term2 .
    ?term2 {pref_label} ?label2 .
    ?term2 {in_vocabulary} ?vocabulary2 .
  }}
  UNION {{
    ?range {sub_class_of} ?rangeRestriction .
    ?rangeRestriction {some_values_from} ?term2 ; {on_property} {related_element_2} .
    ?term2 {pref_label} ?label2 .
    ?term2 {in_vocabulary} ?vocabulary2 .
  }}
}}
"#
        ))
    }

    /// Every asserted, non-blank `rdf:type` of a term
    pub fn term_types(schema: &Schema, term_iri: &str) -> Self {
        let term = bind_iri(term_iri);
        let Iris {
            concept, rdf_type, ..
        } = Iris::from_schema(schema);

        debug!(term = term_iri, "building term types query");

        Self::new(format!(
            r#"CONSTRUCT {{
  ?term a {concept} .
  ?term a ?allTypes .
}}
WHERE {{
  BIND({term} AS ?term)
  ?term {rdf_type} ?allTypes .
  FILTER(!isBlank(?allTypes))
}}
"#
        ))
    }

    /// Full term record: header fields, definition, alternate labels, source,
    /// and the broader / narrower terms with their base fields
    pub fn term_detail(schema: &Schema, term_iri: &str) -> Self {
        let term = bind_iri(term_iri);
        let Iris {
            concept,
            pref_label,
            alt_label,
            definition,
            broader,
            narrower,
            source,
            title,
            in_vocabulary,
            vocabulary,
            ..
        } = Iris::from_schema(schema);

        debug!(term = term_iri, "building term detail query");

        Self::new(format!(
            r#"CONSTRUCT {{
  ?term a {concept} ; {pref_label} ?label ; {in_vocabulary} ?vocabulary .
  ?vocabulary a {vocabulary} ; {title} ?vocabularyTitle .
  ?term {definition} ?definition .
  ?term {alt_label} ?altLabel .
  ?term {source} ?source .
  ?term {broader} ?parent .
  ?parent a {concept} ; {pref_label} ?parentLabel ; {in_vocabulary} ?parentVocabulary .
  ?parentVocabulary a {vocabulary} ; {title} ?parentVocabularyTitle .
  ?parent {definition} ?parentDefinition .
  ?term {narrower} ?child .
  ?child a {concept} ; {pref_label} ?childLabel ; {in_vocabulary} ?childVocabulary .
  ?childVocabulary a {vocabulary} ; {title} ?childVocabularyTitle .
  ?child {definition} ?childDefinition .
}}
WHERE {{
  BIND({term} AS ?term)
  ?term a {concept} ; {pref_label} ?label ; {in_vocabulary} ?vocabulary .
  ?vocabulary a {vocabulary} .
  OPTIONAL {{ ?vocabulary {title} ?vocabularyTitle }}
  OPTIONAL {{ ?term {definition} ?definition }}
  OPTIONAL {{ ?term {alt_label} ?altLabel }}
  OPTIONAL {{ ?term {source} ?source }}
  OPTIONAL {{
    ?term {broader} ?parent .
    ?parent a {concept} ; {pref_label} ?parentLabel ; {in_vocabulary} ?parentVocabulary .
    ?parentVocabulary a {vocabulary} .
    OPTIONAL {{ ?parentVocabulary {title} ?parentVocabularyTitle }}
    OPTIONAL {{ ?parent {definition} ?parentDefinition }}
  }}
  OPTIONAL {{
    ?term {narrower} ?child .
    ?child a {concept} ; {pref_label} ?childLabel ; {in_vocabulary} ?childVocabulary .
    ?childVocabulary a {vocabulary} .
    OPTIONAL {{ ?childVocabulary {title} ?childVocabularyTitle }}
    OPTIONAL {{ ?child {definition} ?childDefinition }}
  }}
}}
"#
        ))
    }

    /// Terms belonging to one vocabulary
    pub fn vocabulary_terms(schema: &Schema, vocabulary_iri: &str) -> Self {
        let vocabulary_node = bind_iri(vocabulary_iri);
        let Iris {
            concept,
            pref_label,
            in_vocabulary,
            ..
        } = Iris::from_schema(schema);

        debug!(vocabulary = vocabulary_iri, "building vocabulary terms query");

        Self::new(format!(
            r#"CONSTRUCT {{
  ?term a {concept} ; {pref_label} ?label ; {in_vocabulary} ?vocabulary .
}}
WHERE {{
  BIND({vocabulary_node} AS ?vocabulary)
  ?term {in_vocabulary} ?vocabulary ;
        a {concept} ;
        {pref_label} ?label .
}}
"#
        ))
    }

    /// Every vocabulary with its optional title
    pub fn vocabularies(schema: &Schema) -> Self {
        let Iris {
            title, vocabulary, ..
        } = Iris::from_schema(schema);

        debug!("building vocabularies query");

        Self::new(format!(
            r#"CONSTRUCT {{
  ?vocabulary a {vocabulary} ; {title} ?title .
}}
WHERE {{
  ?vocabulary a {vocabulary} .
  OPTIONAL {{ ?vocabulary {title} ?title }}
}}
"#
        ))
    }
}

impl fmt::Display for SparqlQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}

impl AsRef<str> for SparqlQuery {
    fn as_ref(&self) -> &str {
        &self.query
    }
}

/// Render an IRI as a SPARQL `IRIREF` token
///
/// Characters SPARQL forbids between `<` and `>` are percent-encoded. This
/// covers the backslash too, so `\u` codepoint escapes cannot survive into the
/// query text. A `%` that does not start a valid escape is encoded as `%25`.
///
/// Relative references are left as they are; evaluating them without a base
/// IRI is a query error.
pub fn bind_iri(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len() + 2);
    let mut encoded = false;

    out.push('<');
    for (i, c) in iri.char_indices() {
        if is_forbidden_in_iriref(c) || (c == '%' && !starts_percent_escape(&iri[i..])) {
            encoded = true;
            // All forbidden characters are ASCII
            let _ = write!(out, "%{:02X}", c as u32);
        } else {
            out.push(c);
        }
    }
    out.push('>');

    if encoded {
        warn!(iri, "percent-encoded characters not allowed in an IRI reference");
    }

    out
}

fn is_forbidden_in_iriref(c: char) -> bool {
    matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\') || c <= '\u{20}'
}

/// `rest` starts with `%` followed by two hex digits
fn starts_percent_escape(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    bytes.len() >= 3 && bytes[1].is_ascii_hexdigit() && bytes[2].is_ascii_hexdigit()
}

/// Schema IRIs pre-rendered as `IRIREF` tokens
struct Iris {
    concept: String,
    pref_label: String,
    alt_label: String,
    definition: String,
    broader: String,
    narrower: String,
    source: String,
    title: String,
    rdf_type: String,
    domain: String,
    range: String,
    sub_class_of: String,
    some_values_from: String,
    on_property: String,
    in_vocabulary: String,
    vocabulary: String,
    related_element_1: String,
    related_element_2: String,
}

impl Iris {
    fn from_schema(schema: &Schema) -> Self {
        Self {
            concept: bind_iri(&schema.concept),
            pref_label: bind_iri(&schema.pref_label),
            alt_label: bind_iri(&schema.alt_label),
            definition: bind_iri(&schema.definition),
            broader: bind_iri(&schema.broader),
            narrower: bind_iri(&schema.narrower),
            source: bind_iri(&schema.source),
            title: bind_iri(&schema.title),
            rdf_type: bind_iri(&schema.rdf_type),
            domain: bind_iri(&schema.domain),
            range: bind_iri(&schema.range),
            sub_class_of: bind_iri(&schema.sub_class_of),
            some_values_from: bind_iri(&schema.some_values_from),
            on_property: bind_iri(&schema.on_property),
            in_vocabulary: bind_iri(&schema.in_vocabulary),
            vocabulary: bind_iri(&schema.vocabulary),
            related_element_1: bind_iri(&schema.related_element_1),
            related_element_2: bind_iri(&schema.related_element_2),
        }
    }
}
