use std::cell::RefCell;
use std::rc::Rc;

use stepkit::{
    Change, Color, ColorBundle, Font, Length, Pass, PassStats, ShapeKind, Size, StepClass, StepProgress,
    StepShape, TextMetrics,
};

const TINT: Color = Color::rgb(0, 122, 255);

/// Each character is as wide as the font size; one line is one font size tall.
struct BlockMetrics;

impl TextMetrics for BlockMetrics {
    fn measure(&self, text: &str, font: &Font) -> Size<Length> {
        if text.is_empty() {
            return Size::ZERO;
        }
        Size::new(font.size * text.chars().count() as f64, font.size)
    }
}

fn abc(current_step: i64) -> StepProgress {
    let mut progress = StepProgress::with_metrics(BlockMetrics);
    progress.set_steps(["A", "B", "C"]);
    progress.set_current_step(current_step);
    progress.settle();
    progress
}

fn classes(progress: &StepProgress) -> String {
    progress.classes().iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

// =============================================================================
// Classification scenarios
// =============================================================================

#[test]
fn three_steps_in_progress() {
    insta::assert_snapshot!(classes(&abc(1)), @"past,current,future");
}

#[test]
fn three_steps_all_done() {
    let progress = abc(3);
    insta::assert_snapshot!(classes(&progress), @"past,past,past");
    assert_eq!(progress.accessibility_value(), None);
}

#[test]
fn three_steps_not_started() {
    insta::assert_snapshot!(classes(&abc(-1)), @"future,future,future");
}

#[test]
fn out_of_range_current_step_degrades() {
    insta::assert_snapshot!(classes(&abc(-5)), @"future,future,future");
    insta::assert_snapshot!(classes(&abc(99)), @"past,past,past");
}

// =============================================================================
// Rebuild invariants
// =============================================================================

#[test]
fn rebuild_matches_steps_and_hides_last_connector() {
    for count in 1..6 {
        let mut progress = StepProgress::with_metrics(BlockMetrics);
        progress.set_steps((0..count).map(|i| format!("step {i}")));
        progress.set_step_shape(ShapeKind::Triangle);
        progress.settle();

        let nodes = progress.nodes();
        assert_eq!(nodes.len(), count);
        assert!(nodes.last().unwrap().is_connector_hidden());
        assert!(nodes[..count - 1].iter().all(|n| !n.is_connector_hidden()));
        for (i, node) in nodes.iter().enumerate() {
            assert_eq!(node.index(), i);
            assert_eq!(node.label(), format!("step {i}"));
        }
    }
}

#[test]
fn single_step_uses_first_step_shape() {
    let mut progress = StepProgress::with_metrics(BlockMetrics);
    progress.set_steps(["Only"]);
    progress.set_first_step_shape(ShapeKind::Circle);
    progress.set_last_step_shape(ShapeKind::Square);
    progress.settle();
    assert_eq!(progress.nodes()[0].shape_kind(), ShapeKind::Circle);
}

#[test]
fn interior_first_and_last_shapes() {
    let mut progress = StepProgress::with_metrics(BlockMetrics);
    progress.set_steps(["a", "b", "c", "d"]);
    progress.set_step_shape(ShapeKind::Rhombus);
    progress.set_first_step_shape(ShapeKind::DownTriangle);
    progress.set_last_step_shape(ShapeKind::Triangle);
    progress.settle();

    let kinds: Vec<_> = progress.nodes().iter().map(|n| n.shape_kind()).collect();
    assert_eq!(
        kinds,
        [ShapeKind::DownTriangle, ShapeKind::Rhombus, ShapeKind::Rhombus, ShapeKind::Triangle]
    );
}

#[test]
fn rebuild_replaces_nodes_wholesale() {
    let mut progress = abc(1);
    progress.set_steps(["X", "Y"]);
    progress.settle();
    let labels: Vec<_> = progress.nodes().iter().map(|n| n.label().to_string()).collect();
    assert_eq!(labels, ["X", "Y"]);
    assert!(progress.nodes()[1].is_connector_hidden());
    assert_eq!(progress.classes(), [StepClass::Past, StepClass::Current]);
}

#[test]
fn nodes_chain_top_to_bottom() {
    let mut progress = StepProgress::with_metrics(BlockMetrics);
    progress.update_layout(|l| {
        l.label_font = Font::regular(Length(10.0));
        l.detail_font = Font::regular(Length(5.0));
        l.line_width = Length(2.0);
    });
    progress.set_steps(["ab", "abcd"]);
    progress.set_detail(0, Some("x"));
    progress.settle();

    // shape 12, paddings default to 6 and 12, leading space 6 + 12 + 2
    let frames = progress.frames();
    assert_eq!(frames[0].min.y, Length(0.0));
    assert_eq!(frames[0].height(), Length(10.0 + 5.0 + 12.0));
    assert_eq!(frames[1].min.y, frames[0].max.y);
    assert_eq!(frames[1].width(), Length(40.0 + 20.0));

    let size = progress.preferred_size().unwrap();
    assert_eq!(size, Size::new(Length(60.0), Length(27.0 + 22.0)));
}

#[test]
fn empty_steps_have_no_intrinsic_size() {
    let mut progress = abc(0);
    assert!(progress.preferred_size().is_some());
    progress.set_steps(Vec::<String>::new());
    progress.settle();
    assert!(progress.nodes().is_empty());
    assert_eq!(progress.preferred_size(), None);
}

#[test]
fn zero_padding_is_defaulted_again_after_reset() {
    let mut progress = abc(0);
    let defaulted = progress.layout().horizontal_padding;
    assert!(!defaulted.is_zero());

    progress.try_set_paddings(0.0, 0.0).unwrap();
    progress.settle();
    assert_eq!(progress.layout().horizontal_padding, defaulted);
}

// =============================================================================
// Recolor
// =============================================================================

#[test]
fn recolor_paints_resolved_bundles() {
    let mut progress = abc(1);
    progress.set_tint_color(Some(TINT));
    progress.settle();

    let palette = *progress.palette();
    let nodes = progress.nodes();
    assert_eq!(nodes[0].colors(), Some(&palette.past));
    assert_eq!(nodes[2].colors(), Some(&palette.future));

    let current = nodes[1].colors().unwrap();
    assert_eq!(current.text, TINT);
    assert_eq!(current.detail, TINT);
    assert_eq!(current.line, palette.future.line);
}

#[test]
fn current_step_change_only_recolors() {
    let mut progress = abc(0);
    let frames = progress.frames();
    let before = progress.stats();

    progress.set_current_step(2);
    assert!(progress.needs_recolor());
    assert!(!progress.needs_rebuild());
    progress.settle();

    assert_eq!(
        progress.stats(),
        PassStats { rebuilds: before.rebuilds, recolors: before.recolors + 1 }
    );
    assert_eq!(progress.frames(), frames);
    assert_eq!(progress.classes(), [StepClass::Past, StepClass::Past, StepClass::Current]);
}

#[test]
fn palette_edits_apply_on_next_recolor() {
    let mut progress = abc(1);
    let orange = Color::rgb(255, 165, 0);
    progress.update_palette(|p| p.current.text = Some(orange));
    assert_eq!(progress.nodes()[1].colors().unwrap().text, Color::BLACK);

    progress.settle();
    let palette = progress.palette();
    let expected = ColorBundle {
        line: palette.future.line,
        ..ColorBundle::uniform(orange, palette.current.fill)
    };
    assert_eq!(progress.nodes()[1].colors(), Some(&expected));
}

// =============================================================================
// Coalescing
// =============================================================================

#[test]
fn burst_of_rebuild_mutations_runs_once_with_final_values() {
    let mut progress = StepProgress::with_metrics(BlockMetrics);
    progress.set_steps(["a"]);
    progress.set_steps(["a", "b"]);
    progress.set_show_numbers(true);
    progress.set_step_shape(ShapeKind::Square);
    progress.set_steps(["a", "b", "c"]);

    assert_eq!(progress.run_pending(), 1);
    assert_eq!(progress.stats(), PassStats { rebuilds: 1, recolors: 0 });
    assert_eq!(progress.nodes().len(), 3);
    assert_eq!(progress.nodes()[2].number(), Some("3"));
    assert_eq!(progress.nodes()[1].shape_kind(), ShapeKind::Square);
}

#[test]
fn burst_of_recolor_mutations_runs_once() {
    let mut progress = abc(0);
    let before = progress.stats();
    for step in [1, 2, 0, 1] {
        progress.set_current_step(step);
    }
    progress.set_tint_color(Some(TINT));
    progress.update_palette(|p| p.future.text = Color::DARK_GRAY);

    assert_eq!(progress.run_pending(), 1);
    assert_eq!(progress.stats().recolors, before.recolors + 1);
    assert_eq!(progress.classes()[1], StepClass::Current);
    assert_eq!(progress.nodes()[2].colors().unwrap().text, Color::DARK_GRAY);
}

#[test]
fn mixed_burst_runs_a_single_rebuild() {
    let mut progress = StepProgress::with_metrics(BlockMetrics);
    progress.set_current_step(0);
    progress.set_steps(["a", "b"]);
    progress.set_current_step(1);
    progress.apply(Change::ShowNumbers(true));

    assert_eq!(progress.run_pending(), 1);
    assert_eq!(progress.stats(), PassStats { rebuilds: 1, recolors: 0 });
    assert!(!progress.needs_recolor());
    assert_eq!(progress.classes(), [StepClass::Past, StepClass::Current]);
}

#[test]
fn wake_hook_sees_each_armed_pass_once() {
    let woken = Rc::new(RefCell::new(Vec::new()));
    let mut progress = StepProgress::with_metrics(BlockMetrics);
    let sink = Rc::clone(&woken);
    progress.set_wake(move |pass| sink.borrow_mut().push(pass));

    progress.set_steps(["a"]);
    progress.set_detail(0, Some("d"));
    progress.set_current_step(0);
    progress.set_current_step(1);
    assert_eq!(*woken.borrow(), [Pass::Rebuild, Pass::Recolor]);

    progress.run_pending();
    progress.set_current_step(0);
    assert_eq!(*woken.borrow(), [Pass::Rebuild, Pass::Recolor, Pass::Recolor]);
}

// =============================================================================
// Accessibility
// =============================================================================

#[test]
fn announcements_follow_the_current_step() {
    let heard = Rc::new(RefCell::new(Vec::new()));
    let mut progress = StepProgress::with_metrics(BlockMetrics);
    let sink = Rc::clone(&heard);
    progress.on_current_step_changed(move |label| sink.borrow_mut().push(label.map(str::to_string)));

    progress.set_steps(["A", "B", "C"]);
    progress.set_current_step(1);
    progress.settle();
    assert_eq!(progress.accessibility_value(), Some("B"));

    // same value, no repeat
    progress.set_tint_color(Some(TINT));
    progress.settle();

    progress.set_current_step(3);
    progress.settle();

    assert_eq!(*heard.borrow(), [Some("B".to_string()), None]);
}

#[test]
fn outline_hit_test_uses_node_local_coordinates() {
    let progress = abc(0);
    for node in progress.nodes() {
        let square = node.layout().shape;
        assert!(node.outline().contains(square.center().to_vec()));
        assert!(!node.outline().contains(square.max.to_vec() + glam::DVec2::splat(1.0)));
    }
}
