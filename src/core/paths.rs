use super::registry::PoolSnapshot;
use super::types::{TokenId, TradePath};

/// Enumerate every simple route from `token_in` to `token_out` using at most
/// `max_hops` pools. "Simple" here means no pool is crossed twice; tokens may
/// repeat only if distinct pools connect them.
///
/// Exploration is depth-first in snapshot order, so the returned path order is
/// a pure function of the input pool order. The comparator's discovery-order
/// tie-break depends on this.
pub fn find_paths(
    snapshot: &PoolSnapshot,
    token_in: &TokenId,
    token_out: &TokenId,
    max_hops: usize,
) -> Vec<TradePath> {
    let mut found = Vec::new();
    if max_hops == 0 || token_in == token_out {
        return found;
    }

    let mut used = vec![false; snapshot.len()];
    let mut tokens = vec![token_in.clone()];
    let mut pools = Vec::new();

    dfs(
        snapshot, token_out, max_hops, &mut used, &mut tokens, &mut pools, &mut found,
    );
    found
}

fn dfs(
    snapshot: &PoolSnapshot,
    token_out: &TokenId,
    max_hops: usize,
    used: &mut Vec<bool>,
    tokens: &mut Vec<TokenId>,
    pools: &mut Vec<usize>,
    found: &mut Vec<TradePath>,
) {
    let current = tokens[tokens.len() - 1].clone();
    for (index, pool) in snapshot.pools.iter().enumerate() {
        if used[index] || !pool.is_usable() {
            continue;
        }
        let next = match pool.other(&current) {
            Some(token) => token.clone(),
            None => continue,
        };

        used[index] = true;
        pools.push(index);
        tokens.push(next.clone());

        if &next == token_out {
            // Reaching the destination terminates this branch; extending past
            // it could only come back via a repeated token.
            found.push(TradePath {
                tokens: tokens.clone(),
                pools: pools.clone(),
            });
        } else if pools.len() < max_hops {
            dfs(snapshot, token_out, max_hops, used, tokens, pools, found);
        }

        tokens.pop();
        pools.pop();
        used[index] = false;
    }
}
