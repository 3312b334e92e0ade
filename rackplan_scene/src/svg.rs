// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording [`RenderSurface`] that exports SVG.
//!
//! This is intended for debugging and headless inspection: outlines become
//! `<polyline>` elements and labels become `<text>`, projected through an
//! [`OrthoCamera`].

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt::Write as _;

use kurbo::Point;
use peniko::Color;
use rackplan_layout::{LabelSpec, RackOutline};
use rackplan_view::OrthoCamera;

use crate::draw::OutlineStyle;
use crate::surface::RenderSurface;

/// Mesh handle of an [`SvgSurface`].
///
/// Slots are reused after removal; the generation keeps a stale handle from
/// removing a newer mesh in the same slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SvgMesh {
    index: usize,
    generation: u32,
}

#[derive(Clone, Debug)]
enum SvgItem {
    Outline {
        points: [Point; 5],
        style: OutlineStyle,
    },
    Label {
        label: LabelSpec,
        size: f64,
    },
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    item: Option<SvgItem>,
}

#[derive(Debug, Default)]
struct Slots {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

/// Records meshes and renders them to an SVG document on demand.
#[derive(Debug, Default)]
pub struct SvgSurface {
    items: RefCell<Slots>,
}

impl SvgSurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of meshes currently alive.
    #[must_use]
    pub fn live_meshes(&self) -> usize {
        let items = self.items.borrow();
        items.slots.len() - items.free.len()
    }

    /// Number of mesh slots allocated, live or free.
    ///
    /// Freed slots are reused, so this stays at the peak number of live meshes.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.items.borrow().slots.len()
    }

    /// Renders every live mesh as seen by `camera`.
    ///
    /// Returns `None` while the camera is not ready.
    #[must_use]
    pub fn to_svg(&self, camera: &OrthoCamera) -> Option<String> {
        let size = camera.viewport_size();
        let wupp = camera.world_units_per_pixel()?;
        let items = self.items.borrow();

        let mut outlines: Vec<(&[Point; 5], &OutlineStyle)> = items
            .slots
            .iter()
            .filter_map(|slot| slot.item.as_ref())
            .filter_map(|item| match item {
                SvgItem::Outline { points, style } => Some((points, style)),
                SvgItem::Label { .. } => None,
            })
            .collect();
        outlines.sort_by(|a, b| a.1.z.total_cmp(&b.1.z));

        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = fmt_num(size.width),
            h = fmt_num(size.height),
        );
        out.push('\n');

        for (points, style) in outlines {
            let mut coords = String::new();
            for p in points {
                let s = camera.world_to_screen(*p)?;
                if !coords.is_empty() {
                    coords.push(' ');
                }
                let _ = write!(coords, "{},{}", fmt_num(s.x), fmt_num(s.y));
            }
            let (stroke, opacity) = color_to_svg(style.color);
            let _ = writeln!(
                out,
                "  <polyline points=\"{coords}\" fill=\"none\" stroke=\"{stroke}\" stroke-opacity=\"{}\"/>",
                fmt_num(f64::from(opacity)),
            );
        }

        for item in items.slots.iter().filter_map(|slot| slot.item.as_ref()) {
            let SvgItem::Label { label, size } = item else {
                continue;
            };
            let anchor = camera.world_to_screen(label.anchor)?;
            let (x, y) = (fmt_num(anchor.x), fmt_num(anchor.y));
            let rotate = if label.rotated {
                format!(" transform=\"rotate(-90 {x} {y})\"")
            } else {
                String::new()
            };
            let _ = writeln!(
                out,
                "  <text x=\"{x}\" y=\"{y}\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\"{rotate}>{}</text>",
                fmt_num(size / wupp),
                escape_text(&label.text),
            );
        }

        out.push_str("</svg>\n");
        Some(out)
    }

    fn insert(&self, item: SvgItem) -> SvgMesh {
        let mut items = self.items.borrow_mut();
        if let Some(index) = items.free.pop() {
            let slot = &mut items.slots[index];
            slot.item = Some(item);
            return SvgMesh {
                index,
                generation: slot.generation,
            };
        }
        items.slots.push(Slot {
            generation: 0,
            item: Some(item),
        });
        SvgMesh {
            index: items.slots.len() - 1,
            generation: 0,
        }
    }
}

impl RenderSurface for SvgSurface {
    type Mesh = SvgMesh;

    fn add_outline(&self, outline: &RackOutline, style: OutlineStyle) -> SvgMesh {
        self.insert(SvgItem::Outline {
            points: *outline.points(),
            style,
        })
    }

    fn add_label(&self, label: &LabelSpec, size: f64) -> SvgMesh {
        self.insert(SvgItem::Label {
            label: label.clone(),
            size,
        })
    }

    fn remove(&self, mesh: SvgMesh) {
        let mut items = self.items.borrow_mut();
        let Some(slot) = items.slots.get_mut(mesh.index) else {
            return;
        };
        if slot.generation != mesh.generation || slot.item.is_none() {
            return;
        }
        slot.item = None;
        slot.generation = slot.generation.wrapping_add(1);
        items.free.push(mesh.index);
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn fmt_num(v: f64) -> String {
    // Three decimals, trailing zeros trimmed.
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { String::from("0") } else { String::from(s) }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
