//! Classification of a batch of rounded right-angle connectors

use super::Endpoints;

/// Shared arrangement of a batch of parallel right-angle connectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineGroup {
    /// No consistent arrangement; corners stay sharp
    #[default]
    None,
    /// Every start sits at or below the ends it feeds (in y-down space)
    Rise,
    /// Every start sits at or above the ends it feeds
    Drop,
    /// Start range strictly encloses the end range
    Shrink,
    /// End range strictly encloses the start range
    Expand,
}

impl LineGroup {
    /// Classify a batch from each member's marker-adjusted endpoints
    ///
    /// Rules are checked in order; ties on both range bounds therefore
    /// resolve to [`LineGroup::Rise`]. An empty batch is [`LineGroup::None`].
    pub fn classify<I>(batch: I) -> LineGroup
    where
        I: IntoIterator<Item = Endpoints>,
    {
        let mut ranges: Option<(YRange, YRange)> = None;
        for endpoints in batch {
            match ranges.as_mut() {
                Some((starts, ends)) => {
                    starts.include(endpoints.start.y);
                    ends.include(endpoints.end.y);
                }
                None => {
                    ranges = Some((
                        YRange::single(endpoints.start.y),
                        YRange::single(endpoints.end.y),
                    ))
                }
            }
        }

        let Some((start, end)) = ranges else {
            return LineGroup::None;
        };

        if start.max >= end.max && start.min >= end.min {
            LineGroup::Rise
        } else if start.max <= end.max && start.min <= end.min {
            LineGroup::Drop
        } else if start.max > end.max && start.min < end.min {
            LineGroup::Shrink
        } else if start.max < end.max && start.min > end.min {
            LineGroup::Expand
        } else {
            LineGroup::None
        }
    }

    /// Whether rounded corners are drawn for this arrangement
    pub fn rounds_corners(self) -> bool {
        matches!(self, LineGroup::Rise | LineGroup::Drop)
    }
}

#[derive(Debug, Clone, Copy)]
struct YRange {
    min: f64,
    max: f64,
}

impl YRange {
    fn single(y: f64) -> Self {
        Self { min: y, max: y }
    }

    fn include(&mut self, y: f64) {
        self.min = self.min.min(y);
        self.max = self.max.max(y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn member(start_y: f64, end_y: f64) -> Endpoints {
        Endpoints {
            start: Point::new(0.0, start_y),
            end: Point::new(100.0, end_y),
        }
    }

    #[test]
    fn test_empty_batch_is_none() {
        assert_eq!(LineGroup::classify(Vec::new()), LineGroup::None);
    }

    #[test]
    fn test_rise() {
        let batch = vec![member(100.0, 10.0), member(120.0, 30.0)];
        assert_eq!(LineGroup::classify(batch), LineGroup::Rise);
    }

    #[test]
    fn test_drop() {
        let batch = vec![member(10.0, 100.0), member(30.0, 120.0)];
        assert_eq!(LineGroup::classify(batch), LineGroup::Drop);
    }

    #[test]
    fn test_shrink() {
        // Starts span 0..100, ends span 40..60
        let batch = vec![member(0.0, 40.0), member(100.0, 60.0)];
        assert_eq!(LineGroup::classify(batch), LineGroup::Shrink);
    }

    #[test]
    fn test_expand() {
        let batch = vec![member(40.0, 0.0), member(60.0, 100.0)];
        assert_eq!(LineGroup::classify(batch), LineGroup::Expand);
    }

    #[test]
    fn test_all_equal_resolves_to_rise() {
        let batch = vec![member(50.0, 50.0), member(50.0, 50.0)];
        assert_eq!(LineGroup::classify(batch), LineGroup::Rise);
    }

    #[test]
    fn test_equal_max_lower_start_min_is_drop() {
        // start max == end max, start min < end min
        let batch = vec![member(100.0, 100.0), member(0.0, 20.0)];
        assert_eq!(LineGroup::classify(batch), LineGroup::Drop);
    }

    #[test]
    fn test_equal_min_higher_start_max_is_rise() {
        let batch = vec![member(0.0, 0.0), member(100.0, 80.0)];
        assert_eq!(LineGroup::classify(batch), LineGroup::Rise);
    }

    #[test]
    fn test_nan_batch_is_none() {
        let batch = vec![member(f64::NAN, f64::NAN)];
        assert_eq!(LineGroup::classify(batch), LineGroup::None);
    }

    #[test]
    fn test_rounds_corners() {
        assert!(LineGroup::Rise.rounds_corners());
        assert!(LineGroup::Drop.rounds_corners());
        assert!(!LineGroup::Shrink.rounds_corners());
        assert!(!LineGroup::Expand.rounds_corners());
        assert!(!LineGroup::None.rounds_corners());
    }
}
