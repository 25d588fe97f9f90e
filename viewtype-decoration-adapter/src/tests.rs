use crate::*;

use alloc::vec;
use alloc::vec::Vec;
use viewtype_decoration::kurbo::Rect;
use viewtype_decoration::peniko::Color;
use viewtype_decoration::{ContainerBounds, DecorationConfig, DecorationHost, ItemOffsets};

const HEADER: i32 = 1;
const COMPANY: i32 = 2;

#[test]
fn divider_list_with_insets() {
    let blue = Color::from_rgba8(0, 0, 255, 255);
    let config = DecorationConfig::builder()
        .default_space_with_insets(3, 45, 45)
        .divider_color(blue)
        .build();
    let host = ListSnapshot::stacked(vec![COMPANY; 6], ContainerBounds::from_width(1080), 150);
    let mut c = DecorationController::new(config);

    let frame = c.frame(&host);
    assert_eq!(frame.offsets.len(), 6);
    assert_eq!(frame.offsets[0], (0, ItemOffsets::ZERO));
    assert!(frame.offsets[1..].iter().all(|(_, o)| o.top == 3));

    let rects: Vec<Rect> = frame.display_list.rects().collect();
    assert_eq!(rects.len(), 5);
    assert_eq!(rects[0], Rect::new(45.0, 147.0, 1035.0, 150.0));
    assert_eq!(rects[4], Rect::new(45.0, 747.0, 1035.0, 750.0));

    for cmd in frame.display_list.commands() {
        let DrawCommand::FillRect {
            color, anti_alias, ..
        } = cmd;
        assert!(*anti_alias);
        assert_eq!(color.to_rgba8(), blue.to_rgba8());
    }
}

#[test]
fn sectioned_list_uses_adjacent_rules() {
    let config = DecorationConfig::builder()
        .first_space(12)
        .default_space(1)
        .side_space(COMPANY, 16)
        .adjacent_space(COMPANY, HEADER, 24)
        .adjacent_space(HEADER, COMPANY, 0)
        .divider_anti_alias(true)
        .build();
    let types = vec![HEADER, COMPANY, COMPANY, HEADER, COMPANY];
    let host = ListSnapshot::stacked(types, ContainerBounds::from_width(300), 40);
    let mut c = DecorationController::new(config);

    let frame = c.frame(&host);
    let offsets: Vec<ItemOffsets> = frame.offsets.iter().map(|(_, o)| *o).collect();
    assert_eq!(
        offsets,
        vec![
            ItemOffsets::new(0, 12, 0, 0),
            ItemOffsets::new(16, 0, 16, 0),
            ItemOffsets::new(16, 1, 16, 0),
            ItemOffsets::new(0, 24, 0, 0),
            ItemOffsets::new(16, 0, 16, 0),
        ]
    );

    // Zero-height gaps still produce (empty) fills; the renderer decides what to skip.
    let rects: Vec<Rect> = frame.display_list.rects().collect();
    assert_eq!(rects.len(), 4);
    assert_eq!(rects[1], Rect::new(16.0, 79.0, 284.0, 80.0));
    assert_eq!(rects[2], Rect::new(0.0, 96.0, 300.0, 120.0));
}

#[test]
fn grid_snapshot_classifies_edges() {
    let config = DecorationConfig::builder()
        .default_space(8)
        .side_spaces(COMPANY, 10, 20)
        .build();
    let children = (0..7).map(|i| ChildItem::new(i, i, (i / 3) as i32 * 100)).collect();
    let host = ListSnapshot::new(vec![COMPANY; 7], ContainerBounds::from_width(300))
        .with_grid(3, Vec::new())
        .with_children(children);
    let mut c = DecorationController::new(config);

    let frame = c.frame(&host);
    let sides: Vec<(i32, i32)> = frame.offsets.iter().map(|(_, o)| (o.left, o.right)).collect();
    assert_eq!(
        sides,
        vec![(10, 0), (0, 0), (0, 20), (10, 0), (0, 0), (0, 20), (10, 0)]
    );
    let tops: Vec<i32> = frame.offsets.iter().map(|(_, o)| o.top).collect();
    assert_eq!(tops, vec![0, 0, 0, 8, 8, 8, 8]);
    assert!(frame.display_list.is_empty());
}

#[test]
fn grid_snapshot_with_span_sizes() {
    let config = DecorationConfig::builder().side_space(COMPANY, 6).build();
    let children = (0..3).map(|i| ChildItem::new(i, i, 0)).collect();
    let host = ListSnapshot::new(vec![HEADER, COMPANY, COMPANY], ContainerBounds::from_width(200))
        .with_grid(2, vec![2, 1, 1])
        .with_children(children);

    let layout = host.layout();
    assert!(layout.is_full_row(0));
    assert!(layout.is_left_edge(1) && !layout.is_right_edge(1));
    assert!(!layout.is_left_edge(2) && layout.is_right_edge(2));

    let mut c = DecorationController::new(config);
    let frame = c.frame(&host);
    assert_eq!(frame.offsets[1].1, ItemOffsets::new(6, 0, 0, 0));
    assert_eq!(frame.offsets[2].1, ItemOffsets::new(0, 0, 6, 0));
}

#[test]
fn detached_and_collapsed_children_are_skipped() {
    let config = DecorationConfig::builder()
        .default_space(5)
        .divider_anti_alias(false)
        .build();
    let mut host = ListSnapshot::stacked(vec![HEADER; 4], ContainerBounds::from_width(100), 50);
    let mut c = DecorationController::new(config);
    c.frame(&host);

    host.update_children(|children| {
        children[1] = ChildItem::detached(1, 50);
        children[2] = ChildItem::new(2, 2, 100).with_collapsed(true);
    });
    let frame = c.frame(&host);

    let laid_out: Vec<usize> = frame.offsets.iter().map(|(k, _)| *k).collect();
    assert_eq!(laid_out, vec![0, 3]);
    // The collapsed instance keeps its previous offsets and still has a position.
    let rects: Vec<Rect> = frame.display_list.rects().collect();
    assert_eq!(
        rects,
        vec![
            Rect::new(0.0, 95.0, 100.0, 100.0),
            Rect::new(0.0, 145.0, 100.0, 150.0),
        ]
    );
}

#[test]
fn snapshot_without_adapter_is_inert() {
    let config = DecorationConfig::builder()
        .default_space(5)
        .divider_anti_alias(true)
        .build();
    let mut host = ListSnapshot::<usize>::without_adapter(ContainerBounds::from_width(100));
    host.push_child(ChildItem::new(0, 0, 0));
    host.push_child(ChildItem::new(1, 1, 50));
    let mut c = DecorationController::new(config);

    let frame = c.frame(&host);
    assert!(frame.offsets.is_empty());
    assert!(frame.display_list.is_empty());
    assert!(c.decoration().cache().is_empty());
}

#[test]
fn prune_drops_offsets_of_removed_instances() {
    let config = DecorationConfig::builder().default_space(5).build();
    let mut host = ListSnapshot::stacked(vec![HEADER; 4], ContainerBounds::from_width(100), 50);
    let mut c = DecorationController::new(config);
    c.frame(&host);
    assert_eq!(c.decoration().cache().len(), 4);

    host.update_children(|children| children.truncate(2));
    assert_eq!(c.prune(&host), 2);
    assert_eq!(c.decoration().cache().len(), 2);
    assert!(c.decoration().cache().retrieve(&3).is_none());
    assert_eq!(c.prune(&host), 0);
}

#[test]
fn display_list_records_in_order() {
    let config = DecorationConfig::builder()
        .default_space(2)
        .divider_color(Color::from_rgba8(10, 20, 30, 255))
        .build();
    let host = ListSnapshot::stacked(vec![HEADER; 3], ContainerBounds::from_width(50), 10);
    let mut c = DecorationController::new(config);

    let mut seen = Vec::new();
    c.layout(&host, |key, o| seen.push((*key, o.top)));
    assert_eq!(seen, vec![(0, 0), (1, 2), (2, 2)]);

    let mut list = DisplayList::new();
    c.draw(&host, &mut list);
    assert_eq!(list.len(), 2);
    let tops: Vec<f64> = list.rects().map(|r| r.y1).collect();
    assert_eq!(tops, vec![10.0, 20.0]);

    list.clear();
    assert!(list.is_empty());
}

#[test]
fn snapshot_lookups_follow_child_updates() {
    let mut host = ListSnapshot::stacked(vec![HEADER; 3], ContainerBounds::from_width(50), 10);
    assert_eq!(host.adapter_position(&2), Some(2));
    assert_eq!(host.item_top(&2), 20);

    // Recycle: instance 2 now shows position 0, and instance 0 is gone.
    host.update_children(|children| {
        children.remove(0);
        children.push(ChildItem::new(2, 0, 0));
        children.retain(|c| !(c.key == 2 && c.position == Some(2)));
    });
    assert_eq!(host.adapter_position(&0), None);
    assert_eq!(host.adapter_position(&2), Some(0));
    assert_eq!(host.item_top(&2), 0);
    assert_eq!(host.adapter_position(&1), Some(1));

    host.push_child(ChildItem::new(7, 2, 30));
    host.push_child(ChildItem::new(7, 9, 90));
    // The first child registered under a key wins.
    assert_eq!(host.adapter_position(&7), Some(2));
    assert_eq!(host.item_top(&7), 30);
}

#[test]
fn large_snapshot_frame_decorates_every_child() {
    let config = DecorationConfig::builder()
        .default_space(2)
        .divider_anti_alias(true)
        .build();
    let host = ListSnapshot::stacked(vec![COMPANY; 5_000], ContainerBounds::from_width(80), 20);
    let mut c = DecorationController::new(config);

    let frame = c.frame(&host);
    assert_eq!(frame.offsets.len(), 5_000);
    assert_eq!(frame.display_list.len(), 4_999);
    let last = frame.display_list.rects().last().unwrap();
    assert_eq!(last, Rect::new(0.0, 99_978.0, 80.0, 99_980.0));
}
