use motif_records_rs::json;

fn main() {
    let motifs = json::read_motif_set("tests/data/motifs.json").unwrap();
    for motif in &motifs {
        println!("{}", motif);
    }
}
