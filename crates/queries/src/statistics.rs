//! Summary statistics over a sequence of prices.

/// Summary figures (count, sum, min, max, average) for a price sequence.
///
/// The empty case is represented explicitly: count 0 and sum 0.0 with `None`
/// for min, max, and average, so callers are forced to handle it.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceStatistics {
    count: usize,
    sum: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl PriceStatistics {
    pub fn empty() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: None,
            max: None,
        }
    }

    pub fn from_prices(prices: impl IntoIterator<Item = f64>) -> Self {
        let mut stats = Self::empty();
        for price in prices {
            stats.record(price);
        }
        stats
    }

    fn record(&mut self, price: f64) {
        self.count += 1;
        self.sum += price;
        self.min = Some(self.min.map_or(price, |m| m.min(price)));
        self.max = Some(self.max.map_or(price, |m| m.max(price)));
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

impl Default for PriceStatistics {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<f64> for PriceStatistics {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from_prices(iter)
    }
}
