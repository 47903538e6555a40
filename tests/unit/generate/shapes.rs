use super::*;
use crate::palette::registry::{OCEAN, SUNSET};

#[test]
fn seeded_output_is_deterministic() {
    let a = generate_shapes(180, "ocean", Some(99));
    let b = generate_shapes(180, "ocean", Some(99));
    assert_eq!(a, b);
    assert_ne!(a, generate_shapes(180, "ocean", Some(100)));
}

#[test]
fn emits_exactly_count_shapes() {
    for n in [0, 1, 5, 180] {
        assert_eq!(generate_shapes(n, "sunset", Some(4)).len(), n as usize);
    }
    assert!(generate_shapes(-1, "sunset", Some(4)).is_empty());
}

#[test]
fn mutations_only_hit_their_index_sets() {
    let shapes = generate_shapes(10, "ocean", Some(1));
    for (i, s) in shapes.iter().enumerate() {
        let edits = s.edits();
        if edits.drift.is_some() {
            assert!(i % 5 == 0, "shape {i} drifted");
        }
        if edits.recolored {
            assert!(i % 3 == 0, "shape {i} recolored");
            assert!(s.size() > 5.0);
        }
        if i % 5 != 0 && !(i % 3 == 0 && s.size() > 5.0) {
            assert!(edits.is_untouched(), "shape {i} mutated");
        }
    }
    assert!(shapes[0].edits().drift.is_some());
    assert!(shapes[5].edits().drift.is_some());
}

#[test]
fn recolor_applies_to_every_large_candidate() {
    let shapes = generate_shapes(600, "sunset", Some(8));
    let mut candidates = 0;
    for (i, s) in shapes.iter().enumerate() {
        let candidate = i % 3 == 0 && s.size() > 5.0;
        assert_eq!(s.edits().recolored, candidate, "shape {i}");
        candidates += usize::from(candidate);
    }
    assert!(candidates > 0);
}

#[test]
fn samples_stay_within_their_ranges() {
    for s in generate_shapes(2_000, "ocean", Some(31)) {
        assert!((1.0..=6.0).contains(&s.size()));
        assert!((0.25..=0.85).contains(&s.alpha()));

        let drift = s.edits().drift.unwrap_or(Vec2::ZERO);
        assert!(drift.x.abs() <= 4.0 && drift.y.abs() <= 4.0);
        let sampled = s.center() - drift;
        let eps = 1e-9;
        assert!((5.0 - eps..=95.0 + eps).contains(&sampled.x));
        assert!((5.0 - eps..=95.0 + eps).contains(&sampled.y));
        assert!((1.0..=99.0).contains(&s.x()) && (1.0..=99.0).contains(&s.y()));
    }
}

#[test]
fn colors_are_members_of_the_resolved_palette() {
    for s in generate_shapes(400, "sunset", Some(12)) {
        assert!(SUNSET.contains(s.color()), "{}", s.color());
    }
}

#[test]
fn unknown_palette_behaves_like_ocean() {
    let fallback = generate_shapes(50, "doesnotexist", Some(6));
    assert_eq!(fallback, generate_shapes(50, "ocean", Some(6)));
    assert!(fallback.iter().all(|s| OCEAN.contains(s.color())));
}

#[test]
fn all_variants_are_sampled() {
    let shapes = generate_shapes(300, "mono", Some(2));
    for kind in SHAPE_KINDS {
        assert!(shapes.iter().any(|s| s.kind() == kind), "{kind:?} missing");
    }
}

#[test]
fn draw_order_matches_a_manual_replay() {
    let shapes = generate_shapes(30, "ocean", Some(555));
    let mut rng = ArtRng::new(Some(555));

    for (i, s) in shapes.iter().enumerate() {
        let mut x = rng.uniform(5.0, 95.0);
        let mut y = rng.uniform(5.0, 95.0);
        let size = rng.uniform(1.0, 6.0);
        let mut color = *rng.choice(&OCEAN.colors);
        let alpha = rng.uniform(0.25, 0.85);
        let kind = *rng.choice(&SHAPE_KINDS);
        if i % 5 == 0 {
            x += rng.uniform(-4.0, 4.0);
            y += rng.uniform(-4.0, 4.0);
        }
        if size > 5.0 && i % 3 == 0 {
            color = *rng.choice(&OCEAN.colors);
        }

        assert_eq!(s.kind(), kind, "shape {i}");
        assert_eq!(s.x().to_bits(), x.to_bits(), "shape {i}");
        assert_eq!(s.y().to_bits(), y.to_bits(), "shape {i}");
        assert_eq!(s.size().to_bits(), size.to_bits(), "shape {i}");
        assert_eq!(s.alpha().to_bits(), alpha.to_bits(), "shape {i}");
        assert_eq!(s.color(), color, "shape {i}");
    }
}

#[test]
fn counts_beyond_the_preallocation_limit_are_complete() {
    let n = PREALLOC_LIMIT as i64 + 3;
    assert_eq!(generate_shapes(n, "ocean", Some(1)).len(), n as usize);
}
