//! Standard glossing abbreviations.
//!
//! The abbreviations of the Leipzig Glossing Rules, as used in interlinear
//! glossed text. See <https://www.eva.mpg.de/lingua/resources/glossing-rules.php>.

/// Leipzig Glossing Rules abbreviations and their meaning, sorted by
/// abbreviation.
pub static LGR_ABBRS: &[(&str, &str)] = &[
    ("A", "agent-like argument of canonical transitive verb"),
    ("ABL", "ablative"),
    ("ABS", "absolutive"),
    ("ACC", "accusative"),
    ("ADJ", "adjective"),
    ("ADV", "adverb(ial)"),
    ("AGR", "agreement"),
    ("ALL", "allative"),
    ("ANTIP", "antipassive"),
    ("APPL", "applicative"),
    ("ART", "article"),
    ("AUX", "auxiliary"),
    ("BEN", "benefactive"),
    ("CAUS", "causative"),
    ("CLF", "classifier"),
    ("COM", "comitative"),
    ("COMP", "complementizer"),
    ("COMPL", "completive"),
    ("COND", "conditional"),
    ("COP", "copula"),
    ("CVB", "converb"),
    ("DAT", "dative"),
    ("DECL", "declarative"),
    ("DEF", "definite"),
    ("DEM", "demonstrative"),
    ("DET", "determiner"),
    ("DIST", "distal"),
    ("DISTR", "distributive"),
    ("DU", "dual"),
    ("DUR", "durative"),
    ("ERG", "ergative"),
    ("EXCL", "exclusive"),
    ("F", "feminine"),
    ("FOC", "focus"),
    ("FUT", "future"),
    ("GEN", "genitive"),
    ("IMP", "imperative"),
    ("INCL", "inclusive"),
    ("IND", "indicative"),
    ("INDF", "indefinite"),
    ("INF", "infinitive"),
    ("INS", "instrumental"),
    ("INTR", "intransitive"),
    ("IPFV", "imperfective"),
    ("IRR", "irrealis"),
    ("LOC", "locative"),
    ("M", "masculine"),
    ("N", "neuter"),
    ("N-", "non- (e.g. NSG nonsingular, NPST nonpast)"),
    ("NEG", "negation, negative"),
    ("NMLZ", "nominalizer/nominalization"),
    ("NOM", "nominative"),
    ("OBJ", "object"),
    ("OBL", "oblique"),
    ("P", "patient-like argument of canonical transitive verb"),
    ("PASS", "passive"),
    ("PFV", "perfective"),
    ("PL", "plural"),
    ("POSS", "possessive"),
    ("PRED", "predicative"),
    ("PRF", "perfect"),
    ("PROG", "progressive"),
    ("PROH", "prohibitive"),
    ("PROX", "proximal/proximate"),
    ("PRS", "present"),
    ("PST", "past"),
    ("PTCP", "participle"),
    ("PURP", "purposive"),
    ("Q", "question particle/marker"),
    ("QUOT", "quotative"),
    ("RECP", "reciprocal"),
    ("REFL", "reflexive"),
    ("REL", "relative"),
    ("RES", "resultative"),
    ("S", "single argument of canonical intransitive verb"),
    ("SBJ", "subject"),
    ("SBJV", "subjunctive"),
    ("SG", "singular"),
    ("TOP", "topic"),
    ("TR", "transitive"),
    ("VOC", "vocative"),
];

/// Meaning of a standard abbreviation.
///
/// Matching is exact; gloss abbreviations are conventionally upper case.
pub fn lookup(abbr: &str) -> Option<&'static str> {
    LGR_ABBRS
        .binary_search_by(|(candidate, _)| candidate.cmp(&abbr))
        .ok()
        .map(|index| LGR_ABBRS[index].1)
}

/// Check if `abbr` is a standard abbreviation.
pub fn is_standard(abbr: &str) -> bool {
    lookup(abbr).is_some()
}

/// Iterate all abbreviations in order.
pub fn abbreviations() -> impl Iterator<Item = (&'static str, &'static str)> {
    LGR_ABBRS.iter().copied()
}
