//! Two-column card stacking for the mini-apps page.
//!
//! Cards are placed online and append-only: each card goes to the column given
//! by the parity of the number of cards placed so far, at that column's current
//! height. Column choice never looks at the accumulated heights.

use crate::theme::{CARD_GAP, CARD_MARGIN, CARD_WIDTH, COLUMN_GUTTER};

/// Pixel metrics of the card grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Width shared by every card
    pub card_width: u32,
    /// Initial height of both columns
    pub margin: u32,
    /// Vertical distance between stacked cards
    pub gap: u32,
    /// Extra horizontal offset of the second column
    pub gutter: u32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            card_width: CARD_WIDTH,
            margin: CARD_MARGIN,
            gap: CARD_GAP,
            gutter: COLUMN_GUTTER,
        }
    }
}

/// A card waiting to be placed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub feature_key: String,
    pub height: u32,
}

impl Card {
    pub fn new(feature_key: impl Into<String>, height: u32) -> Self {
        Self {
            feature_key: feature_key.into(),
            height,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

/// Where a card ended up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub column: usize,
    pub position: Position,
}

/// Greedy two-column stack with running column heights
#[derive(Debug, Clone)]
pub struct ColumnStackLayout {
    metrics: LayoutMetrics,
    column_heights: [u32; 2],
    placed_count: usize,
}

impl ColumnStackLayout {
    pub fn new(metrics: LayoutMetrics) -> Self {
        Self {
            metrics,
            column_heights: [metrics.margin; 2],
            placed_count: 0,
        }
    }

    /// Place a card and advance its column.
    pub fn place_next(&mut self, card: &Card) -> Placement {
        let column = self.placed_count % 2;
        let position = Position {
            x: self.horizontal_offset(column),
            y: self.column_heights[column],
        };

        self.column_heights[column] = self.column_heights[column]
            .saturating_add(card.height)
            .saturating_add(self.metrics.gap);
        self.placed_count += 1;

        ::log::trace!(
            "Placed card '{}' in column {} at ({}, {})",
            card.feature_key,
            column,
            position.x,
            position.y
        );

        Placement { column, position }
    }

    /// Height of the taller column, used to size the scrollable container
    pub fn total_height(&self) -> u32 {
        self.column_heights[0].max(self.column_heights[1])
    }

    /// Forget every placement; used when the card set is rebuilt
    pub fn reset(&mut self) {
        self.column_heights = [self.metrics.margin; 2];
        self.placed_count = 0;
    }

    pub fn column_heights(&self) -> [u32; 2] {
        self.column_heights
    }

    pub fn placed_count(&self) -> usize {
        self.placed_count
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    fn horizontal_offset(&self, column: usize) -> u32 {
        let gutter = if column == 1 { self.metrics.gutter } else { 0 };
        gutter + self.metrics.card_width * column as u32
    }
}

impl Default for ColumnStackLayout {
    fn default() -> Self {
        Self::new(LayoutMetrics::default())
    }
}
