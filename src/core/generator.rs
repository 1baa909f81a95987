use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;
use tracing::{debug, info};

use super::errors::{GenerationError, Result};
use super::selector::{WeightedSelector, DEFAULT_ALPHA, DEFAULT_BETA};
use crate::models::{IdentifierPool, OrderRecord};
use crate::utils::{random_amount, random_timestamp};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const LAST_SECOND_OF_DAY: i64 = 24 * 60 * 60 - 1;

/// How a requested order count translates into produced records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderCount {
    /// Produce exactly `n` records.
    Exactly(i64),
    /// Treat `n` as an exclusive loop bound starting at 1, producing `n - 1`
    /// records. Matches datasets produced by the legacy generator.
    ExclusiveBound(i64),
}

impl OrderCount {
    /// Number of records to produce, or `InvalidCount` when none would be.
    pub fn resolve(self) -> Result<usize> {
        let (requested, produced) = match self {
            OrderCount::Exactly(n) if n > 0 => (n, n),
            OrderCount::ExclusiveBound(n) if n > 1 => (n, n - 1),
            OrderCount::Exactly(n) | OrderCount::ExclusiveBound(n) => {
                return Err(GenerationError::InvalidCount(n))
            }
        };
        usize::try_from(produced).map_err(|_| GenerationError::InvalidCount(requested))
    }
}

/// Inclusive timestamp window covering whole days, `from 00:00:00` to `to 23:59:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(GenerationError::InvalidDateRange { from, to });
        }
        let start = from.and_time(NaiveTime::MIN);
        let end = to.and_time(NaiveTime::MIN) + Duration::seconds(LAST_SECOND_OF_DAY);
        Ok(Self { start, end })
    }

    pub fn parse(from: &str, to: &str) -> Result<Self> {
        Self::new(parse_date(from)?, parse_date(to)?)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| {
        GenerationError::DateParse {
            input: input.to_string(),
            source,
        }
    })
}

pub struct OrderGenerator {
    selector: WeightedSelector,
    range: DateRange,
}

impl OrderGenerator {
    pub fn new(selector: WeightedSelector, range: DateRange) -> Self {
        Self { selector, range }
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn selector(&self) -> &WeightedSelector {
        &self.selector
    }

    pub fn next_record<R: Rng + ?Sized>(
        &self,
        pool: &IdentifierPool,
        rng: &mut R,
    ) -> Result<OrderRecord> {
        let identifier = self.selector.select(pool, rng)?;
        let amount = random_amount(rng);
        let timestamp = random_timestamp(rng, self.range.start, self.range.end);
        Ok(OrderRecord::new(identifier, amount, timestamp))
    }

    /// Lazily yields records; validation happens before the first item.
    pub fn records<'a, R: Rng + ?Sized>(
        &'a self,
        pool: &'a IdentifierPool,
        count: OrderCount,
        rng: &'a mut R,
    ) -> Result<impl Iterator<Item = Result<OrderRecord>> + 'a> {
        let total = count.resolve()?;
        pool.ensure_not_empty()?;

        debug!(
            total,
            pool_size = pool.len(),
            alpha = self.selector.alpha(),
            beta = self.selector.beta(),
            start = %self.range.start,
            end = %self.range.end,
            "Starting order generation"
        );

        Ok((0..total).map(move |_| self.next_record(pool, rng)))
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        pool: &IdentifierPool,
        count: OrderCount,
        rng: &mut R,
    ) -> Result<Vec<OrderRecord>> {
        let orders = self.records(pool, count, rng)?.collect::<Result<Vec<_>>>()?;
        info!(orders = orders.len(), "Generated fake orders");
        Ok(orders)
    }
}

/// Convenience wrapper taking raw `YYYY-MM-DD` strings and default Beta(2, 2) weighting.
pub fn create_fake_orders<R: Rng + ?Sized>(
    pool: &IdentifierPool,
    count: OrderCount,
    from_date: &str,
    to_date: &str,
    rng: &mut R,
) -> Result<Vec<OrderRecord>> {
    let range = DateRange::parse(from_date, to_date)?;
    let selector = WeightedSelector::new(DEFAULT_ALPHA, DEFAULT_BETA)?;
    OrderGenerator::new(selector, range).generate(pool, count, rng)
}
