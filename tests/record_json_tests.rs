use motif_records_rs::hit::MastHit;
use motif_records_rs::motif::Motif;
use motif_records_rs::site::SiteMeme;
use serde_json::{json, Value};

fn populated_motif() -> Motif {
    Motif::new()
        .with_id("motif_1")
        .with_seq_type("upstream")
        .with_pssm_id(1)
        .with_evalue(1.3e-5)
        .with_pssm_rows(vec![vec![0.05, 0.05, 0.05, 0.85], vec![0.1, 0.1, 0.7, 0.1]])
        .with_hits(vec![MastHit::new()
            .with_seq_id("NC_000913_b0720")
            .with_strand("+")
            .with_hit_start(112)
            .with_hit_end(114)
            .with_score(11.4)
            .with_hit_pvalue(2.1e-6)])
        .with_sites(vec![SiteMeme::new()
            .with_seq_id("NC_000913_b0720")
            .with_start(87)
            .with_pvalue(4.8e-5)
            .with_left_flank("ACGT")
            .with_site("TAG")
            .with_right_flank("GGCA")])
        .with_additional_property("consensus", "TAG")
}

#[test]
fn test_round_trip() {
    let motif = populated_motif();
    let encoded = serde_json::to_string(&motif).unwrap();
    let decoded: Motif = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, motif);
}

#[test]
fn test_empty_record_encodes_to_empty_object() {
    let encoded = serde_json::to_string(&Motif::new()).unwrap();
    assert_eq!(encoded, "{}");

    // only bag entries set
    let motif = Motif::new().with_additional_property("source", "mast");
    let encoded = serde_json::to_string(&motif).unwrap();
    assert_eq!(encoded, r#"{"source":"mast"}"#);
}

#[test]
fn test_unknown_keys_go_to_bag() {
    let decoded: Motif = serde_json::from_str(r#"{"id":"M1","foo":42}"#).unwrap();
    assert_eq!(decoded.id.as_deref(), Some("M1"));
    assert_eq!(decoded.additional_properties.len(), 1);
    assert_eq!(decoded.additional_properties["foo"], json!(42));
}

#[test]
fn test_builder_equivalence() {
    let chained = Motif::new()
        .with_evalue(0.001)
        .with_id("M1")
        .with_pssm_rows(vec![vec![0.1, 0.2], vec![0.3, 0.4]])
        .with_seq_type("upstream")
        .with_pssm_id(7);

    let mut direct = Motif::new();
    direct.id = Some("M1".to_string());
    direct.seq_type = Some("upstream".to_string());
    direct.pssm_id = Some(7);
    direct.evalue = Some(0.001);
    direct.pssm_rows = Some(vec![vec![0.1, 0.2], vec![0.3, 0.4]]);

    assert_eq!(chained, direct);
}

#[test]
fn test_example_document_reencodes_to_same_keys() {
    let doc = r#"{"id":"M1","seq_type":"upstream","pssm_id":7,"evalue":0.001,"pssm_rows":[[0.1,0.2],[0.3,0.4]]}"#;
    let motif: Motif = serde_json::from_str(doc).unwrap();
    let reencoded = serde_json::to_value(&motif).unwrap();

    let expected: Value = serde_json::from_str(doc).unwrap();
    assert_eq!(reencoded, expected);

    let object = reencoded.as_object().unwrap();
    assert_eq!(object.len(), 5);
    assert!(!object.contains_key("hits"));
    assert!(!object.contains_key("sites"));
}

#[test]
fn test_nested_unknown_keys_round_trip() {
    let doc = r#"{"hits":[{"seq_id":"s1","gc_skew":0.12}]}"#;
    let motif: Motif = serde_json::from_str(doc).unwrap();
    let hits = motif.hits.as_ref().unwrap();
    assert_eq!(hits[0].seq_id.as_deref(), Some("s1"));
    assert_eq!(hits[0].additional_properties["gc_skew"], json!(0.12));

    let encoded = serde_json::to_string(&motif).unwrap();
    let decoded: Motif = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, motif);
}

#[test]
fn test_set_additional_property_overwrites() {
    let mut motif = Motif::new();
    motif.set_additional_property("source", "meme");
    motif.set_additional_property("source", "mast");
    assert_eq!(motif.additional_properties.len(), 1);
    assert_eq!(motif.additional_properties["source"], json!("mast"));
}

#[test]
fn test_display_with_only_id() {
    let motif = Motif::new().with_id("M1");
    let rendered = motif.to_string();
    assert!(rendered.contains("id=M1"));
    assert_eq!(
        rendered,
        "Motif [id=M1, seqType=null, pssmId=null, evalue=null, pssmRows=null, \
         hits=null, sites=null, additionalProperties={}]"
    );
}

#[test]
fn test_display_nested_records() {
    let motif = Motif::new()
        .with_id("M2")
        .with_hits(vec![MastHit::new().with_seq_id("seq_7").with_strand("+")]);
    let rendered = motif.to_string();
    assert!(rendered.contains(
        "hits=[MastHit [seqId=seq_7, strand=+, hitStart=null, hitEnd=null, \
         score=null, hitPvalue=null, additionalProperties={}]]"
    ));
}
