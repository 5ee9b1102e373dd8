use jsonapi_rels::{Document, Linkage, Resolved, Resolver, Resource, Slot};
use std::collections::HashSet;

#[derive(Debug, Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn next_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }

    fn next_below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

/// Builds a three-level `roots -> mids -> leaves` document where a random
/// subset of targets is left out of `included`.
struct Generated {
    document: Document,
    root: Resource,
    present_mids: HashSet<String>,
    present_leaves: HashSet<String>,
    /// mid id -> leaf ids (None when the mid declares no `leaf` relationship)
    mid_leaves: Vec<(String, Option<Vec<String>>)>,
    leaf_is_plural: Vec<bool>,
}

fn generate(rng: &mut Lcg) -> Generated {
    let mid_count = 1 + rng.next_below(5) as usize;
    let mut document = Document::default();
    let mut present_mids = HashSet::new();
    let mut present_leaves = HashSet::new();
    let mut mid_leaves = Vec::new();
    let mut leaf_is_plural = Vec::new();

    for m in 0..mid_count {
        let mid_id = format!("m{}", m);
        let plural = rng.next_bool();
        let leaves: Option<Vec<String>> = if rng.next_below(4) == 0 {
            None
        } else if plural {
            Some((0..rng.next_below(3)).map(|l| format!("l{}-{}", m, l)).collect())
        } else {
            Some(vec![format!("l{}-0", m)])
        };

        for leaf in leaves.iter().flatten() {
            if rng.next_below(3) != 0 {
                document.included.push(Resource::new("leaves", leaf.as_str()));
                present_leaves.insert(leaf.clone());
            }
        }

        if rng.next_below(4) != 0 {
            let mut mid = Resource::new("mids", mid_id.as_str());
            if let Some(ids) = &leaves {
                let linkage = if plural {
                    Linkage::plural(ids.iter().map(|id| ("leaves", id.as_str())))
                } else {
                    Linkage::single("leaves", ids[0].as_str())
                };
                mid = mid.with_relationship("leaf", linkage);
            }
            document.included.push(mid);
            present_mids.insert(mid_id.clone());
        }

        mid_leaves.push((mid_id, leaves));
        leaf_is_plural.push(plural);
    }

    let root = Resource::new("roots", "r").with_relationship(
        "mid",
        Linkage::plural(mid_leaves.iter().map(|(id, _)| ("mids", id.as_str()))),
    );

    Generated {
        document,
        root,
        present_mids,
        present_leaves,
        mid_leaves,
        leaf_is_plural,
    }
}

fn ids(slots: &[Slot<'_>]) -> Vec<Option<String>> {
    slots
        .iter()
        .map(|slot| slot.resource().map(|r| r.id.clone()))
        .collect()
}

#[test]
fn randomized_plural_length_and_hole_invariants() {
    let mut rng = Lcg::new(0x4A50_1A11_2026_1019);
    let iterations = 64;

    for i in 0..iterations {
        let generated = generate(&mut rng);
        let resolver = Resolver::with_defaults(&generated.document);

        let mids = resolver.get_relationship(&generated.root, "mid");
        let slots = mids
            .as_plural()
            .unwrap_or_else(|| panic!("mid must stay plural on iteration {i}"));
        assert_eq!(
            slots.len(),
            generated.mid_leaves.len(),
            "plural length must match stub count on iteration {i}"
        );
        for (slot, (mid_id, _)) in slots.iter().zip(&generated.mid_leaves) {
            assert_eq!(
                slot.is_hole(),
                !generated.present_mids.contains(mid_id),
                "hole placement mismatch for {mid_id} on iteration {i}"
            );
        }

        let mut expected = Vec::new();
        let mids_with_cardinality = generated.mid_leaves.iter().zip(&generated.leaf_is_plural);
        for ((mid_id, leaves), plural) in mids_with_cardinality {
            match leaves {
                Some(leaves) if generated.present_mids.contains(mid_id) => {
                    if *plural {
                        for leaf in leaves {
                            expected.push(generated.present_leaves.get(leaf).cloned());
                        }
                    } else {
                        expected.push(generated.present_leaves.get(&leaves[0]).cloned());
                    }
                }
                _ => expected.push(None),
            }
        }

        let deep = resolver.get_deep_relationship(&generated.root, "mid.leaf");
        match &deep {
            Resolved::Plural(slots) => {
                assert_eq!(ids(slots), expected, "deep walk mismatch on iteration {i}")
            }
            other => panic!("expected plural deep result on iteration {i}, got {:?}", other),
        }

        let set = resolver.get_relationships(&generated.root);
        assert_eq!(set.len(), 1);
        assert_eq!(set["mid"], mids);
    }
}

#[test]
fn randomized_single_hop_deep_equals_relationship() {
    let mut rng = Lcg::new(0xD0C_2026);

    for i in 0..32 {
        let generated = generate(&mut rng);
        let resolver = Resolver::with_defaults(&generated.document);

        for mid in &generated.document.included {
            assert_eq!(
                resolver.get_deep_relationship(mid, "leaf"),
                resolver.get_relationship(mid, "leaf"),
                "single-hop mismatch on iteration {i}"
            );
        }
    }
}
