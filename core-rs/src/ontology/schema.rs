//! Vocabulary schema configuration
//!
//! Every IRI the query builders and record mappers refer to lives in one
//! immutable [`Schema`] value that callers pass in explicitly. The defaults
//! describe the SKOS + popis-dat modelling used by the government vocabularies;
//! a YAML config may override any subset of them.

use serde::{Deserialize, Serialize};

use super::namespaces::{dcterms, owl, popis_dat, rdf, rdfs, skos, z_sgov_pojem};

/// IRIs of the classes and properties that shape a term, its vocabulary and
/// its relations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Schema {
    /// Class of every browsable term (`skos:Concept`)
    pub concept: String,
    pub pref_label: String,
    pub alt_label: String,
    pub definition: String,
    pub broader: String,
    pub narrower: String,
    pub source: String,
    /// Vocabulary title (`dcterms:title`)
    pub title: String,
    pub rdf_type: String,
    pub domain: String,
    pub range: String,
    pub sub_class_of: String,
    pub some_values_from: String,
    pub on_property: String,
    pub object_property: String,
    /// Term → vocabulary membership (`je-pojmem-ze-slovníku`)
    pub in_vocabulary: String,
    /// Vocabulary class (`slovník`)
    pub vocabulary: String,
    /// First relational role of a relation class (`má-vztažený-prvek-1`)
    pub related_element_1: String,
    /// Second relational role of a relation class (`má-vztažený-prvek-2`)
    pub related_element_2: String,
    /// Marker type of relation terms (`typ-vztahu`)
    pub relation_type: String,
    /// Marker type of attribute terms (`typ-vlastnosti`)
    pub attribute_type: String,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            concept: skos::CONCEPT.to_string(),
            pref_label: skos::PREF_LABEL.to_string(),
            alt_label: skos::ALT_LABEL.to_string(),
            definition: skos::DEFINITION.to_string(),
            broader: skos::BROADER.to_string(),
            narrower: skos::NARROWER.to_string(),
            source: dcterms::SOURCE.to_string(),
            title: dcterms::TITLE.to_string(),
            rdf_type: rdf::TYPE.to_string(),
            domain: rdfs::DOMAIN.to_string(),
            range: rdfs::RANGE.to_string(),
            sub_class_of: rdfs::SUB_CLASS_OF.to_string(),
            some_values_from: owl::SOME_VALUES_FROM.to_string(),
            on_property: owl::ON_PROPERTY.to_string(),
            object_property: owl::OBJECT_PROPERTY.to_string(),
            in_vocabulary: popis_dat::JE_POJMEM_ZE_SLOVNIKU.to_string(),
            vocabulary: popis_dat::SLOVNIK.to_string(),
            related_element_1: z_sgov_pojem::MA_VZTAZENY_PRVEK_1.to_string(),
            related_element_2: z_sgov_pojem::MA_VZTAZENY_PRVEK_2.to_string(),
            relation_type: z_sgov_pojem::TYP_VZTAHU.to_string(),
            attribute_type: z_sgov_pojem::TYP_VLASTNOSTI.to_string(),
        }
    }
}

impl Schema {
    /// Type IRIs that make a term a property rather than a plain concept
    pub fn property_types(&self) -> [&str; 3] {
        [
            self.object_property.as_str(),
            self.relation_type.as_str(),
            self.attribute_type.as_str(),
        ]
    }

    /// Field name / IRI pairs, in declaration order
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("concept", self.concept.as_str()),
            ("prefLabel", self.pref_label.as_str()),
            ("altLabel", self.alt_label.as_str()),
            ("definition", self.definition.as_str()),
            ("broader", self.broader.as_str()),
            ("narrower", self.narrower.as_str()),
            ("source", self.source.as_str()),
            ("title", self.title.as_str()),
            ("rdfType", self.rdf_type.as_str()),
            ("domain", self.domain.as_str()),
            ("range", self.range.as_str()),
            ("subClassOf", self.sub_class_of.as_str()),
            ("someValuesFrom", self.some_values_from.as_str()),
            ("onProperty", self.on_property.as_str()),
            ("objectProperty", self.object_property.as_str()),
            ("inVocabulary", self.in_vocabulary.as_str()),
            ("vocabulary", self.vocabulary.as_str()),
            ("relatedElement1", self.related_element_1.as_str()),
            ("relatedElement2", self.related_element_2.as_str()),
            ("relationType", self.relation_type.as_str()),
            ("attributeType", self.attribute_type.as_str()),
        ]
    }

    /// Names of fields whose IRI is blank
    pub fn blank_fields(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|(_, iri)| iri.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}
