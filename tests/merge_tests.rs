//! Merge engine tests - line-level rules

use tui_2048::core::{merge_line, SimpleRng};

fn random_line(rng: &mut SimpleRng) -> [u32; 4] {
    let mut line = [0; 4];
    for cell in line.iter_mut() {
        // Mostly small tiles so equal neighbours are common.
        let exp = rng.next_range(5);
        *cell = if exp == 0 { 0 } else { 1 << exp };
    }
    line
}

#[test]
fn test_documented_examples() {
    let m = merge_line([2, 2, 4, 0]);
    assert_eq!((m.line, m.changed, m.score), ([4, 4, 0, 0], true, 4));

    let m = merge_line([0, 0, 2, 2]);
    assert_eq!((m.line, m.changed, m.score), ([4, 0, 0, 0], true, 4));

    let m = merge_line([2, 4, 8, 16]);
    assert_eq!((m.line, m.changed, m.score), ([2, 4, 8, 16], false, 0));
}

#[test]
fn test_three_equal_tiles_merge_once() {
    assert_eq!(merge_line([2, 2, 2, 0]).line, [4, 2, 0, 0]);
    assert_eq!(merge_line([0, 2, 2, 2]).line, [4, 2, 0, 0]);
    assert_eq!(merge_line([2, 2, 4, 4]).line, [4, 8, 0, 0]);
}

#[test]
fn test_merged_tile_does_not_merge_again() {
    // 2+2 makes a 4, which must not then absorb the existing 4.
    let m = merge_line([2, 2, 4, 8]);
    assert_eq!(m.line, [4, 4, 8, 0]);
    assert_eq!(m.score, 4);
}

#[test]
fn test_tile_sum_is_conserved() {
    let mut rng = SimpleRng::new(8);
    for _ in 0..2000 {
        let line = random_line(&mut rng);
        let m = merge_line(line);
        let before: u32 = line.iter().sum();
        let after: u32 = m.line.iter().sum();
        assert_eq!(before, after, "{:?} -> {:?}", line, m.line);
        assert_eq!(m.line.len(), line.len());
    }
}

#[test]
fn test_score_is_sum_of_merged_tiles() {
    let mut rng = SimpleRng::new(21);
    for _ in 0..2000 {
        let line = random_line(&mut rng);
        let m = merge_line(line);
        let tiles_before = line.iter().filter(|&&v| v != 0).count();
        let tiles_after = m.line.iter().filter(|&&v| v != 0).count();
        let merges = tiles_before - tiles_after;

        assert_eq!(m.score == 0, merges == 0, "{:?}", line);
        if merges > 0 {
            assert_eq!(m.score % 4, 0, "merged tiles are at least 4");
        }
    }
}

#[test]
fn test_result_is_compacted_left() {
    let mut rng = SimpleRng::new(34);
    for _ in 0..2000 {
        let m = merge_line(random_line(&mut rng));
        let first_zero = m.line.iter().position(|&v| v == 0).unwrap_or(4);
        assert!(m.line[first_zero..].iter().all(|&v| v == 0), "{:?}", m.line);
    }
}

#[test]
fn test_changed_flag_matches_difference() {
    let mut rng = SimpleRng::new(55);
    for _ in 0..2000 {
        let line = random_line(&mut rng);
        let m = merge_line(line);
        assert_eq!(m.changed, m.line != line);
    }
}

#[test]
fn test_oversized_tiles_never_overflow() {
    let top = 1u32 << 31;
    let line = [top, top, 2, 2];
    let m = merge_line(line);

    assert_eq!(m.line, [top, top, 4, 0]);
    assert_eq!(m.score, 4);
    let before: u64 = line.iter().map(|&v| v as u64).sum();
    let after: u64 = m.line.iter().map(|&v| v as u64).sum();
    assert_eq!(before, after);
}
