use super::constants::DEFAULT_FEE_BPS;
use super::types::{Pool, TokenId};
use super::{Context, Result};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fs;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

/// A consistent view of every pool the router may route through. The vector
/// order is the determinism anchor: path enumeration and trade tie-breaking
/// both follow it, so a snapshot must not be reordered between reads.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoolSnapshot {
    pub pools: Vec<Pool>,
    pub block_number: u64,
}

impl PoolSnapshot {
    pub fn new(pools: Vec<Pool>, block_number: u64) -> Self {
        Self { pools, block_number }
    }

    pub fn pool(&self, index: usize) -> &Pool {
        &self.pools[index]
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn contains_token(&self, token: &TokenId) -> bool {
        self.pools.iter().any(|pool| pool.contains(token))
    }
}

/// Read a previously indexed snapshot from disk. Faster than waiting for the
/// external data layer to poll fresh reserves.
pub fn read_snapshot_from_disk<P: AsRef<Path>>(path: P) -> Result<PoolSnapshot> {
    let json = fs::read_to_string(&path)
        .context("Couldn't read pool snapshot file".to_string())?;
    let snapshot: PoolSnapshot =
        serde_json::from_str(&json).context("Couldn't parse pool snapshot file".to_string())?;
    Ok(snapshot)
}

pub fn write_snapshot_on_disk<P: AsRef<Path>>(path: P, snapshot: &PoolSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json).context("Couldn't write pool snapshot file".to_string())?;
    Ok(())
}

/// Load pool definitions from the CSV the indexing layer maintains, one pool
/// per line: address,token0,token1,reserve0,reserve1,decimals0,decimals1[,fee_bps].
/// Pools referencing tokens outside `supported_tokens` are skipped.
pub fn read_pools_from_csv<P: AsRef<Path>>(
    path: P,
    supported_tokens: &[String],
) -> Result<Vec<Pool>> {
    let file = File::open(&path).context("Couldn't open pool definition file".to_string())?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut pools = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < 7 {
            continue;
        }
        let token0 = record[1].trim().to_string();
        let token1 = record[2].trim().to_string();
        if !supported_tokens.contains(&token0) || !supported_tokens.contains(&token1) {
            continue;
        }
        let fee_bps = if record.len() > 7 {
            record[7].trim().parse::<u32>().unwrap_or(DEFAULT_FEE_BPS)
        } else {
            DEFAULT_FEE_BPS
        };
        pools.push(Pool {
            address: record[0].trim().to_string(),
            token0,
            token1,
            reserve0: parse_amount(record[3].trim())?,
            reserve1: parse_amount(record[4].trim())?,
            decimals0: record[5].trim().parse()?,
            decimals1: record[6].trim().parse()?,
            fee_bps,
        });
    }
    Ok(pools)
}

fn parse_amount(raw: &str) -> Result<BigUint> {
    BigUint::from_str(raw).context(format!("Couldn't parse reserve amount '{raw}'"))
}
