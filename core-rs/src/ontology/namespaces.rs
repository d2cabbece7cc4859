//! Well-known vocabulary IRIs
//!
//! Standard W3C vocabularies plus the two Czech government vocabularies the
//! browsed knowledge base is modelled in (popis-dat, z-sgov-pojem).

pub mod rdf {
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

pub mod rdfs {
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
}

pub mod owl {
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    pub const SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";
    pub const ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
}

pub mod skos {
    pub const NS: &str = "http://www.w3.org/2004/02/skos/core#";
    pub const CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";
    pub const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
    pub const ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";
    pub const DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
    pub const BROADER: &str = "http://www.w3.org/2004/02/skos/core#broader";
    pub const NARROWER: &str = "http://www.w3.org/2004/02/skos/core#narrower";
}

pub mod dcterms {
    pub const NS: &str = "http://purl.org/dc/terms/";
    pub const SOURCE: &str = "http://purl.org/dc/terms/source";
    pub const TITLE: &str = "http://purl.org/dc/terms/title";
}

/// Data description vocabulary (agendový slovník popis-dat)
pub mod popis_dat {
    pub const NS: &str = "http://onto.fel.cvut.cz/ontologies/slovník/agendový/popis-dat/pojem/";
    /// Links a term to the vocabulary it belongs to
    pub const JE_POJMEM_ZE_SLOVNIKU: &str =
        "http://onto.fel.cvut.cz/ontologies/slovník/agendový/popis-dat/pojem/je-pojmem-ze-slovníku";
    /// Vocabulary class
    pub const SLOVNIK: &str = "http://onto.fel.cvut.cz/ontologies/slovník/agendový/popis-dat/pojem/slovník";
}

/// Foundational government vocabulary (základní slovník)
pub mod z_sgov_pojem {
    pub const NS: &str = "https://slovník.gov.cz/základní/pojem/";
    pub const MA_VZTAZENY_PRVEK_1: &str = "https://slovník.gov.cz/základní/pojem/má-vztažený-prvek-1";
    pub const MA_VZTAZENY_PRVEK_2: &str = "https://slovník.gov.cz/základní/pojem/má-vztažený-prvek-2";
    pub const TYP_VZTAHU: &str = "https://slovník.gov.cz/základní/pojem/typ-vztahu";
    pub const TYP_VLASTNOSTI: &str = "https://slovník.gov.cz/základní/pojem/typ-vlastnosti";
}
