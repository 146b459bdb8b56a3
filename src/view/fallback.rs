//! Curated Springfield locations used when the live list is unavailable.

use serde_json::{json, Value};

/// The 25 curated entries, in display order.
pub fn curated_locations() -> Vec<Value> {
    vec![
        json!({ "id": "kwik-e-mart", "name": "Kwik-E-Mart", "type": "Store", "address": "Springfield", "owner": "Apu Nahasapeemapetilon" }),
        json!({ "id": "moes-tavern", "name": "Moe's Tavern", "type": "Bar", "address": "Walnut Street, Springfield", "owner": "Moe Szyslak" }),
        json!({ "id": "springfield-elementary", "name": "Springfield Elementary School", "type": "School", "principal": "Seymour Skinner" }),
        json!({ "id": "nuclear-plant", "name": "Springfield Nuclear Power Plant", "type": "Power Plant", "owner": "Mr. Burns" }),
        json!({ "id": "simpson-house", "name": "Simpson Family House", "type": "Residence", "address": "742 Evergreen Terrace" }),
        json!({ "id": "church", "name": "The First Church of Springfield", "type": "Church", "pastor": "Reverend Lovejoy" }),
        json!({ "id": "androids-dungeon", "name": "The Android's Dungeon & Baseball Card Shop", "type": "Store", "owner": "Comic Book Guy" }),
        json!({ "id": "krustylu-studios", "name": "Krustylu Studios", "type": "TV Studio", "show": "Krusty the Clown" }),
        json!({ "id": "springfield-mall", "name": "Springfield Mall", "type": "Mall" }),
        json!({ "id": "police-station", "name": "Springfield Police Station", "type": "Police Station", "chief": "Chief Wiggum" }),
        json!({ "id": "springfield-gorge", "name": "Springfield Gorge", "type": "Landmark" }),
        json!({ "id": "noiseland-arcade", "name": "Noiseland Arcade", "type": "Arcade" }),
        json!({ "id": "duff-brewery", "name": "Duff Brewery", "type": "Brewery" }),
        json!({ "id": "springfield-town-hall", "name": "Springfield Town Hall", "type": "Government" }),
        json!({ "id": "springfield-general-hospital", "name": "Springfield General Hospital", "type": "Hospital" }),
        json!({ "id": "springfield-monorail", "name": "Springfield Monorail Station", "type": "Transit" }),
        json!({ "id": "springfield-penitentiary", "name": "Springfield Penitentiary", "type": "Prison" }),
        json!({ "id": "springfield-zoo", "name": "Springfield Zoo", "type": "Zoo" }),
        json!({ "id": "itchy-and-scratchy-studios", "name": "Itchy & Scratchy Studios", "type": "TV Studio" }),
        json!({ "id": "springfield-library", "name": "Springfield Public Library", "type": "Library" }),
        json!({ "id": "springfield-museum", "name": "Springfield Museum of Natural History", "type": "Museum" }),
        json!({ "id": "springfield-park", "name": "Springfield Park", "type": "Park" }),
        json!({ "id": "lard-lad-donuts", "name": "Lard Lad Donuts", "type": "Restaurant" }),
        json!({ "id": "rusty-barnacle", "name": "The Rusty Barnacle", "type": "Restaurant" }),
        json!({ "id": "pringles", "name": "Springfield Gorge Hospital Helipad", "type": "Landmark" }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_list_shape() {
        let curated = curated_locations();
        assert_eq!(curated.len(), 25);
        for entry in &curated {
            let obj = entry.as_object().unwrap();
            assert!(obj.get("id").and_then(Value::as_str).is_some());
            assert!(obj.get("name").and_then(Value::as_str).is_some());
        }
    }

    #[test]
    fn test_curated_ids_unique() {
        let curated = curated_locations();
        let mut ids: Vec<&str> = curated
            .iter()
            .filter_map(|entry| entry["id"].as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 25);
    }
}
