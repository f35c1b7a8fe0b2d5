use crate::config::SolverConfig;
use crate::perf::Profiler;
use crate::size::{SizeSpec, SizeTable};
use crate::tree::{LayoutTree, NodeId, validate_padding};
use crate::{LayoutError, OverrunKind};
use std::time::Instant;
use trellis_types::{Direction, Rect, SizeId};

/// Resolves sizes and positions items for a container and everything nested in it.
///
/// The size table is shared across the whole recursion: a percentage or flex
/// weight resolved in one container is seen as a fixed length by every other
/// item linked to the same size entry, wherever it lives in the tree.
pub(crate) struct Solver<'a> {
    config: &'a SolverConfig,
    sizes: &'a mut SizeTable,
    tree: &'a mut LayoutTree,
    profiler: &'a dyn Profiler,
}

impl<'a> Solver<'a> {
    pub(crate) fn new(
        config: &'a SolverConfig,
        sizes: &'a mut SizeTable,
        tree: &'a mut LayoutTree,
        profiler: &'a dyn Profiler,
    ) -> Self {
        Self {
            config,
            sizes,
            tree,
            profiler,
        }
    }

    /// Solves `node_id` and its subtree inside `available`.
    pub(crate) fn solve(&mut self, available: Rect, node_id: NodeId) -> Result<(), LayoutError> {
        let start = Instant::now();
        validate_region(available)?;
        let result = self.solve_node(available, node_id);
        self.profiler.record("Solver::solve", start.elapsed());
        result
    }

    fn solve_node(&mut self, available: Rect, node_id: NodeId) -> Result<(), LayoutError> {
        self.profiler.count_node();

        let (direction, padding, size_ids) = match self.tree.node(node_id) {
            Some(node) => (
                node.direction(),
                node.padding(),
                node.items()
                    .map(|item| item.size_id().clone())
                    .collect::<Vec<SizeId>>(),
            ),
            None => return Ok(()),
        };
        validate_padding(&padding)?;
        let axis_len = available.main_len(direction);

        // 1. Fixed lengths and percentages of this container's main axis.
        let mut main_sum = 0.0f32;
        let mut flex_weight_sum = 0.0f32;
        for size_id in &size_ids {
            match self.sizes.get(size_id)? {
                SizeSpec::Fixed(v) => main_sum += v,
                SizeSpec::Percent(p) => {
                    let length = axis_len * p / 100.0;
                    self.sizes.resolve(size_id, length)?;
                    main_sum += length;
                }
                SizeSpec::FlexWeight(w) => flex_weight_sum += w,
            }
        }

        // 2. Space left for flex items.
        let inner_len = axis_len - padding.main_total();
        if inner_len < 0.0 {
            return Err(overrun(OverrunKind::Margin, padding.main_total(), axis_len));
        }
        let main_available = inner_len - main_sum;
        // Zero-weight flex items take no space, so they do not make a container flexible.
        let flexible = flex_weight_sum > 0.0;
        if flexible && main_available < 0.0 {
            return Err(overrun(
                OverrunKind::Flex,
                main_sum + padding.main_total(),
                axis_len,
            ));
        }
        if !flexible && main_available < -self.config.overrun_tolerance {
            return Err(overrun(
                OverrunKind::NonFlex,
                main_sum + padding.main_total(),
                axis_len,
            ));
        }

        log::debug!(
            "Solving {} container (node {}) in {:?}: {} items, fixed {:.2}, flex weight {:.2}, free {:.2}",
            direction.name(),
            node_id.index(),
            available,
            size_ids.len(),
            main_sum,
            flex_weight_sum,
            main_available
        );

        // 3. Share the free space among flex items by weight.
        for size_id in &size_ids {
            match self.sizes.get(size_id)? {
                SizeSpec::FlexWeight(w) => {
                    let length = if flex_weight_sum > 0.0 {
                        main_available * w / flex_weight_sum
                    } else {
                        0.0
                    };
                    self.sizes.resolve(size_id, length)?;
                }
                SizeSpec::Fixed(_) => {}
                spec @ SizeSpec::Percent(_) => {
                    return Err(invalid_state(size_id, "flex distribution", spec));
                }
            }
        }

        // 4. Walk the main axis, then descend into nested containers.
        let cross_len = (available.cross_len(direction) - padding.cross_total()).max(0.0);
        let mut cursor = match direction {
            Direction::Right => available.x + padding.start_main,
            Direction::Down => available.y + available.height - padding.start_main,
        };

        for (index, size_id) in size_ids.iter().enumerate() {
            let length = match self.sizes.get(size_id)? {
                SizeSpec::Fixed(v) => v,
                spec => return Err(invalid_state(size_id, "positioning", spec)),
            };

            let rect = match direction {
                Direction::Right => {
                    let rect = Rect::new(
                        cursor,
                        available.y + padding.start_cross,
                        length,
                        cross_len,
                    );
                    cursor += length;
                    rect
                }
                Direction::Down => {
                    cursor -= length;
                    Rect::new(
                        available.x + padding.start_cross,
                        cursor,
                        cross_len,
                        length,
                    )
                }
            };
            self.tree.set_rect(node_id, index, rect);

            let child = self.tree.node(node_id).and_then(|node| {
                let item = node.item_at(index);
                log::trace!("Placed '{}' at {:?}", item.id(), rect);
                self.tree.child_node(item.id())
            });
            if let Some(child) = child {
                self.solve_node(rect, child)?;
            }
        }
        Ok(())
    }
}

fn validate_region(available: Rect) -> Result<(), LayoutError> {
    let fields = [
        ("x", available.x),
        ("y", available.y),
        ("width", available.width),
        ("height", available.height),
    ];
    for (field, value) in fields {
        let extent = matches!(field, "width" | "height");
        if !value.is_finite() || (extent && value < 0.0) {
            return Err(LayoutError::InvalidRegion { field, value });
        }
    }
    Ok(())
}

fn overrun(reason: OverrunKind, required: f32, available: f32) -> LayoutError {
    LayoutError::InsufficientSpace {
        reason,
        required,
        available,
    }
}

fn invalid_state(size: &SizeId, stage: &'static str, spec: SizeSpec) -> LayoutError {
    LayoutError::InvalidSizeState {
        size: size.clone(),
        stage,
        found: spec.kind_name(),
    }
}
