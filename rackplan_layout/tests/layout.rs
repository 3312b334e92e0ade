// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `rackplan_layout` crate.
//!
//! These exercise the public planning API end to end: id assignment order,
//! outline geometry per region, label rotation, and group overlays.

use rackplan_layout::{
    ClusterConfig, LayoutConfig, Orientation, OverlaySelection, RackDimensions, Region, RowConfig,
    group_outline, plan_layout, rack_outline,
};

#[test]
fn ids_are_contiguous_and_increasing() {
    let layout = plan_layout(&LayoutConfig::default());
    let ids: Vec<u32> = layout.placements().iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, (1..=30).collect::<Vec<_>>());
}

#[test]
fn vertical_region_precedes_horizontal_region() {
    let layout = plan_layout(&LayoutConfig::default());
    let orientations: Vec<Orientation> =
        layout.placements().iter().map(|p| p.orientation).collect();
    let split = orientations
        .iter()
        .position(|o| *o == Orientation::Horizontal)
        .unwrap();
    assert_eq!(split, 18);
    assert!(orientations[..split].iter().all(|o| *o == Orientation::Vertical));
    assert!(orientations[split..].iter().all(|o| *o == Orientation::Horizontal));
}

#[test]
fn planning_is_idempotent() {
    let config = LayoutConfig::default();
    assert_eq!(plan_layout(&config), plan_layout(&config));
}

#[test]
fn cluster_visitation_is_column_then_row_then_side() {
    let config = LayoutConfig::default();
    let dims = config.dimensions;
    let layout = plan_layout(&config);
    let vertical = layout.region(Region::VerticalClusters);

    // Racks 1 and 2 share a pair; rack 3 starts the next pair up the same column.
    assert!(vertical[0].center.x < vertical[1].center.x);
    assert_eq!(vertical[0].center.y, vertical[1].center.y);
    assert_eq!(vertical[2].center.x, vertical[0].center.x);
    let pair_step = vertical[2].center.y - vertical[0].center.y;
    assert!((pair_step - config.clusters.row_spacing(&dims)).abs() < 1e-12);

    // Rack 7 opens the middle column, which is centered on the origin.
    let mid = (vertical[6].center.x + vertical[7].center.x) / 2.0;
    assert!(mid.abs() < 1e-12);
    let col_step = vertical[6].center.x - vertical[0].center.x;
    assert!((col_step - config.clusters.column_spacing(&dims)).abs() < 1e-12);
}

#[test]
fn back_to_back_racks_leave_the_double_rack_gap() {
    let config = LayoutConfig::default();
    let dims = config.dimensions;
    let layout = plan_layout(&config);
    let left = layout.vertical_region()[0].footprint(&dims);
    let right = layout.vertical_region()[1].footprint(&dims);
    let gap = right.x0 - left.x1;
    assert!((gap - config.clusters.double_rack_gap).abs() < 1e-12);
}

#[test]
fn neighboring_columns_leave_the_aisle_gap() {
    let config = LayoutConfig::default();
    let dims = config.dimensions;
    let layout = plan_layout(&config);
    // Right rack of the first column, left rack of the second column.
    let right_of_first = layout.vertical_region()[1].footprint(&dims);
    let left_of_second = layout.vertical_region()[6].footprint(&dims);
    let aisle = left_of_second.x0 - right_of_first.x1;
    assert!((aisle - config.clusters.aisle_gap).abs() < 1e-12);
}

#[test]
fn outlines_match_rack_footprints() {
    let layout = plan_layout(&LayoutConfig::default());
    let dims = layout.dimensions();
    for p in layout.placements() {
        let outline = rack_outline(p.center, p.orientation, dims);
        assert!(outline.is_closed());
        let bbox = outline.bounding_box();
        let (w, h) = match p.orientation {
            Orientation::Horizontal => (dims.width, dims.depth),
            Orientation::Vertical => (dims.depth, dims.width),
        };
        assert!((bbox.width() - w).abs() < 1e-12, "rack {}", p.id);
        assert!((bbox.height() - h).abs() < 1e-12, "rack {}", p.id);
    }
}

#[test]
fn labels_rotate_exactly_in_the_vertical_region() {
    let layout = plan_layout(&LayoutConfig::default());
    for (p, label) in layout.placements().iter().zip(layout.labels()) {
        assert_eq!(label.rotated, p.id.get() <= 18);
        assert_eq!(label.text, format!("Rack {}", p.id.get()));
        assert_eq!(label.anchor, p.center);
    }
}

#[test]
fn label_threshold_follows_the_cluster_count() {
    let config = LayoutConfig {
        clusters: ClusterConfig {
            columns: 2,
            rows: 4,
            ..ClusterConfig::default()
        },
        ..LayoutConfig::default()
    };
    let layout = plan_layout(&config);
    assert_eq!(layout.label_rule().rotated_through(), 16);
    for p in layout.placements() {
        assert_eq!(
            layout.label_for(p).rotated,
            p.orientation == Orientation::Vertical
        );
    }
}

#[test]
fn group_outline_keeps_margin_from_outer_faces() {
    let layout = plan_layout(&LayoutConfig::default());
    let dims = layout.dimensions();
    let margin = 0.05;
    let row = layout.row(1);
    let outline = group_outline(&row, 0..=2, margin, dims).unwrap();
    let bbox = outline.bounding_box();

    let left_face = row[0].footprint(dims).x0;
    let right_face = row[2].footprint(dims).x1;
    let bottom_face = row[0].footprint(dims).y0;
    let top_face = row[0].footprint(dims).y1;
    assert!((left_face - bbox.x0 - margin).abs() < 1e-12);
    assert!((bbox.x1 - right_face - margin).abs() < 1e-12);
    assert!((bottom_face - bbox.y0 - margin).abs() < 1e-12);
    assert!((bbox.y1 - top_face - margin).abs() < 1e-12);

    let ids: Vec<u32> = row[..3].iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, [20, 22, 24]);
}

#[test]
fn overlay_selection_can_target_other_runs() {
    let layout = plan_layout(&LayoutConfig::default());
    let selection = OverlaySelection {
        row: 0,
        columns: 3..=5,
        ..OverlaySelection::default()
    };
    let overlay = layout.group_overlay(&selection).unwrap();
    let near = layout.row(0);
    let dims = layout.dimensions();
    let bbox = overlay.outline.bounding_box();
    assert!((bbox.x0 - (near[3].footprint(dims).x0 - 0.05)).abs() < 1e-12);
    assert!((bbox.x1 - (near[5].footprint(dims).x1 + 0.05)).abs() < 1e-12);
}

#[test]
fn custom_counts_and_dimensions() {
    let config = LayoutConfig {
        dimensions: RackDimensions::from_feet(8.0, 2.0, 6.0),
        clusters: ClusterConfig {
            columns: 1,
            rows: 2,
            ..ClusterConfig::default()
        },
        rows: RowConfig {
            columns: 3,
            rows: 1,
            ..RowConfig::default()
        },
    };
    let layout = plan_layout(&config);
    assert_eq!(layout.len(), 4 + 3);
    assert_eq!(layout.vertical_region().len(), 4);
    assert_eq!(layout.row_count(), 1);
    let row = layout.row(0);
    assert_eq!(row.len(), 3);
    // A three-rack row is centered on x = 0.
    assert!(row[1].center.x.abs() < 1e-12);
}
