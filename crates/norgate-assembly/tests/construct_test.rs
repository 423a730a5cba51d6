use norgate_assembly::{AssemblyError, AssemblyOptions, ConstructAssembler};
use norgate_core::operations::reverse_complement;
use norgate_core::Sequence;
use norgate_grammar::parse_name;
use norgate_parts::{AliasTable, PartsCatalog};
use pretty_assertions::assert_eq;

fn fixtures() -> (PartsCatalog, AliasTable) {
    let catalog = PartsCatalog::from_csv_reader(include_str!("fixtures/parts.csv").as_bytes())
        .expect("fixture catalog");
    let aliases = AliasTable::from_json_str(include_str!("fixtures/aliases.json"))
        .expect("fixture aliases");
    (catalog, aliases)
}

fn residues(catalog: &PartsCatalog, name: &str) -> String {
    catalog
        .get(name)
        .unwrap_or_else(|| panic!("fixture is missing {name}"))
        .sequence
        .sequence
        .clone()
}

fn joined(catalog: &PartsCatalog, names: &[&str]) -> String {
    names.iter().map(|n| residues(catalog, n)).collect()
}

fn labels(seq: &Sequence) -> Vec<&str> {
    seq.annotations.iter().map(|a| a.label.as_str()).collect()
}

#[test]
fn test_pgrr_gene_construct() {
    let (catalog, aliases) = fixtures();
    let assembler = ConstructAssembler::new(&catalog, &aliases);
    let seq = assembler.parse("pMOD6-pGRR-F1-yeGFP").unwrap().unwrap();

    let expected = joined(
        &catalog,
        &[
            "URA3 Promoter",
            "URA3",
            "tADH1",
            "PP2",
            "pGRR",
            "F1 target",
            "pGRR TATA",
            "pGRR RBS",
            "PS",
            "yeGFP",
            "TP",
            "tCYC1",
            "TS",
            "URA3 3'UTR",
        ],
    );
    assert_eq!(seq.sequence, expected);
    assert_eq!(seq.name, "pMOD6-pGRR-F1-yeGFP");
    assert_eq!(labels(&seq).first(), Some(&"URA3 Promoter"));
    assert_eq!(labels(&seq).last(), Some(&"URA3 3'UTR"));
}

#[test]
fn test_pgrr_insulated_guide_construct() {
    let (catalog, aliases) = fixtures();
    let assembler = ConstructAssembler::new(&catalog, &aliases);
    let seq = assembler.parse("pMOD8-pGRR-W5W8-iRGR-W36").unwrap().unwrap();

    let expected = [
        joined(
            &catalog,
            &["HIS3 Promoter", "HIS3", "tADH1", "PP2", "pGRR", "W5 target", "pGRR TATA"],
        ),
        reverse_complement(&residues(&catalog, "W8 target")),
        joined(
            &catalog,
            &[
                "pGRR RBS",
                "PS",
                "ASBV1 pGRR_INS1",
                "ASBV1 Ribozyme",
                "ASBV1 pGRR_INS2",
                "W36 target",
                "spCas9 gRNA Handle",
                "HDV Ribozyme",
                "TP",
                "tCYC1",
                "TS",
                "HIS3 3'UTR",
            ],
        ),
    ]
    .concat();
    assert_eq!(seq.sequence, expected);

    let j = seq.annotations.iter().find(|a| a.label == "W8 target").unwrap();
    assert_eq!(j.strand, norgate_core::Strand::Reverse);
}

#[test]
fn test_case_insensitive_names_assemble_identically() {
    let (catalog, aliases) = fixtures();
    let assembler = ConstructAssembler::new(&catalog, &aliases);
    let lower = assembler.parse("pMOD6-pGRR-F1-yeGFP").unwrap().unwrap();
    let upper = assembler.parse("PMOD6-PGRR-F1-yeGFP").unwrap().unwrap();
    assert_eq!(lower.sequence, upper.sequence);
    assert_eq!(labels(&lower), labels(&upper));
}

#[test]
fn test_unparseable_name_is_not_an_error() {
    let (catalog, aliases) = fixtures();
    let assembler = ConstructAssembler::new(&catalog, &aliases);
    assert_eq!(assembler.parse("notAValidName").unwrap(), None);
    assert_eq!(assembler.parse("").unwrap(), None);
}

#[test]
fn test_named_homology_with_marker_override() {
    let (catalog, aliases) = fixtures();
    let assembler = ConstructAssembler::new(&catalog, &aliases);
    let seq = assembler
        .parse("pMOD-LTR1-Nat-pGRR-W5W8-URGR-F1")
        .unwrap()
        .unwrap();

    assert!(seq.sequence.starts_with(&joined(&catalog, &["LTR1 homology 1", "NATMX", "PP2"])));
    assert!(seq.sequence.ends_with(&joined(&catalog, &["TS", "LTR1 homology 2"])));
    assert!(labels(&seq).contains(&"ASBV1 pGRR_INS1"));
    assert!(!labels(&seq).contains(&"tADH1"));
}

#[test]
fn test_fused_homology_and_marker() {
    let (catalog, aliases) = fixtures();
    let assembler = ConstructAssembler::new(&catalog, &aliases);
    let seq = assembler.parse("pMOD-HOkan-A-yeGFP").unwrap().unwrap();
    let expected = joined(
        &catalog,
        &[
            "HO homology 1",
            "KANMX",
            "PP2",
            "pADH1",
            "PS",
            "yeGFP",
            "TP",
            "tCYC1",
            "TS",
            "HO homology 2",
        ],
    );
    assert_eq!(seq.sequence, expected);
}

#[test]
fn test_uninsulated_guide_derives_insulator() {
    let (catalog, aliases) = fixtures();
    let assembler = ConstructAssembler::new(&catalog, &aliases);
    let seq = assembler.parse("pMOD4-A-RGR-W36").unwrap().unwrap();

    let target = residues(&catalog, "W36 target");
    let expected = [
        joined(&catalog, &["TRP1 Promoter", "TRP1", "tADH1", "PP2", "pADH1", "PS"]),
        reverse_complement(&target[..6]),
        joined(
            &catalog,
            &[
                "HH Ribozyme",
                "W36 target",
                "spCas9 gRNA Handle",
                "HDV Ribozyme",
                "TP",
                "tCYC1",
                "TS",
                "TRP1 3'UTR",
            ],
        ),
    ]
    .concat();
    assert_eq!(seq.sequence, expected);
}

#[test]
fn test_insulated_guide_behind_letter_promoter() {
    let (catalog, aliases) = fixtures();
    let assembler = ConstructAssembler::new(&catalog, &aliases);
    let seq = assembler.parse("pMOD6-A-iRGR-W5").unwrap().unwrap();
    let cassette = joined(
        &catalog,
        &[
            "pADH1",
            "PS",
            "ASBV1 pADH1_INS1",
            "ASBV1 Ribozyme",
            "ASBV1 pADH1_INS2",
            "W5 target",
        ],
    );
    assert!(seq.sequence.contains(&cassette));
}

#[test]
fn test_known_promoters_match_any_case() {
    let (catalog, aliases) = fixtures();
    let assembler = ConstructAssembler::new(&catalog, &aliases);
    let upper = assembler.parse("PMOD6-PADH1-iRGR-W5").unwrap().unwrap();
    let lower = assembler.parse("pMOD6-pADH1-iRGR-W5").unwrap().unwrap();
    assert_eq!(upper.sequence, lower.sequence);
    assert!(labels(&upper).contains(&"pADH1"));
    assert!(labels(&upper).contains(&"ASBV1 pADH1_INS1"));
}

#[test]
fn test_insulated_guide_needs_known_promoter_context() {
    let (catalog, aliases) = fixtures();
    let assembler = ConstructAssembler::new(&catalog, &aliases);
    assert_eq!(
        assembler.parse("pMOD6G-iRGR-W5").unwrap_err(),
        AssemblyError::UnknownPromoterFamily("pGPD".into())
    );
    // the uninsulated family has no such restriction
    assert!(assembler.parse("pMOD6G-RGR-W5").unwrap().is_some());
}

#[test]
fn test_unknown_homology_family() {
    let (catalog, aliases) = fixtures();
    let assembler = ConstructAssembler::new(&catalog, &aliases);
    assert_eq!(
        assembler.parse("pMOD5-pADH1-mCherry").unwrap_err(),
        AssemblyError::UnknownHomologyFamily("5".into())
    );
}

#[test]
fn test_missing_parts_are_named() {
    let (catalog, aliases) = fixtures();
    let assembler = ConstructAssembler::new(&catalog, &aliases);
    assert_eq!(
        assembler.parse("pMOD6-A-RGR-W99").unwrap_err(),
        AssemblyError::PartNotFound("W99".into())
    );
    // aliased, but the target row is metadata-only
    assert_eq!(
        assembler.parse("pMOD6-A-RGR-F2").unwrap_err(),
        AssemblyError::PartNotFound("F2 target".into())
    );
    assert_eq!(
        assembler.parse("pMOD-LTR2-Zeo-A-yeGFP").unwrap_err(),
        AssemblyError::PartNotFound("Zeo".into())
    );
}

#[test]
fn test_default_operators_fill_gaps() {
    let (catalog, aliases) = fixtures();
    let bare = ConstructAssembler::new(&catalog, &aliases)
        .parse("pMOD6-pGRR-W5-yeGFP")
        .unwrap()
        .unwrap();

    let options = AssemblyOptions {
        default_i: Some("W10".into()),
        default_j: Some("W8".into()),
    };
    let assembler = ConstructAssembler::new(&catalog, &aliases).with_options(options);
    let filled = assembler.parse("pMOD6-pGRR-W5-yeGFP").unwrap().unwrap();

    // i was given, so only the j default applies
    assert_eq!(filled.len() - bare.len(), catalog.get("W8 target").unwrap().len());
    assert!(labels(&filled).contains(&"W8 target"));
    assert!(!labels(&filled).contains(&"W10 target"));
}

#[test]
fn test_assembly_from_parsed_fields() {
    let (catalog, aliases) = fixtures();
    let assembler = ConstructAssembler::new(&catalog, &aliases);
    let parsed = parse_name("pMOD8-pGRR-W5W8-iRGR-W36").unwrap();
    let seq = assembler.assemble(&parsed).unwrap();
    let named = assembler.parse("pMOD8-pGRR-W5W8-iRGR-W36").unwrap().unwrap();
    assert_eq!(seq.sequence, named.sequence);
}

#[test]
fn test_vector_excludes_cut_sites_and_maintenance_region() {
    let (catalog, aliases) = fixtures();
    let assembler = ConstructAssembler::new(&catalog, &aliases);
    for name in ["pMOD6-pGRR-F1-yeGFP", "pMOD4-A-RGR-W36", "pMOD-HOkan-A-yeGFP"] {
        let seq = assembler.parse(name).unwrap().unwrap();
        let labels = labels(&seq);
        assert!(!labels.contains(&"PmeI"), "{name}");
        assert!(!labels.contains(&"AMPR and ORI"), "{name}");
        assert!(labels.contains(&"PP2") && labels.contains(&"TS"), "{name}");
    }
}

#[test]
fn test_catalog_is_untouched_by_assembly() {
    let (catalog, aliases) = fixtures();
    let before = residues(&catalog, "W36 target");
    let assembler = ConstructAssembler::new(&catalog, &aliases);
    assembler.parse("pMOD4-A-RGR-W36").unwrap();
    assembler.parse("pMOD8-pGRR-W5W8-iRGR-W36").unwrap();
    let part = catalog.get("W36 target").unwrap();
    assert_eq!(part.sequence.sequence, before);
    assert_eq!(part.sequence.annotations.len(), 1);
}
