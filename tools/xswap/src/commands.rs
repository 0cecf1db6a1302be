//! One function per offline subcommand. Each returns the JSON document to print.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde_json::{json, Value};
use tracing::debug;
use xs_01_commitment::{
    build_leaves, build_leaves_from_hashes, build_proof, commit_for_fills, commit_multiple,
    commit_single, generate_secrets, hash_secret, parse_secret, verify_fill, verify_secret,
    HashLock, MerkleNode, MerkleProof, SecretHash, SecureSecret,
};
use xs_02_timelock::{classify, next_transition, Side, Timelock};
use xs_03_coordinator::CoordinatorConfig;

/// Escrow side as given on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    /// Source escrow
    Src,
    /// Destination escrow
    Dst,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Src => Side::Source,
            SideArg::Dst => Side::Destination,
        }
    }
}

fn parse_secrets(raw: &[String]) -> Result<Vec<SecureSecret>> {
    raw.iter()
        .enumerate()
        .map(|(i, s)| parse_secret(s).with_context(|| format!("Invalid secret #{i}")))
        .collect()
}

fn parse_all<T>(raw: &[String], what: &str) -> Result<Vec<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.iter()
        .enumerate()
        .map(|(i, s)| s.parse().with_context(|| format!("Invalid {what} #{i}")))
        .collect()
}

/// `xswap secrets`
pub fn secrets(parts: u32) -> Result<Value> {
    anyhow::ensure!(parts > 0, "parts must be at least 1");
    let secrets = generate_secrets(parts as usize);
    let hash_lock = commit_for_fills(&secrets)?;
    let hashes = secrets
        .iter()
        .map(|s| hash_secret(s.as_bytes()))
        .collect::<Result<Vec<SecretHash>, _>>()?;

    Ok(json!({
        "parts": parts,
        "multiFill": parts > 1,
        "hashLock": hash_lock,
        "secrets": secrets.iter().map(SecureSecret::reveal_hex).collect::<Vec<_>>(),
        "secretHashes": hashes,
    }))
}

/// `xswap hash`
pub fn hash(secret: &str) -> Result<Value> {
    let secret = parse_secret(secret).context("Invalid secret")?;
    let hash = hash_secret(secret.as_bytes())?;
    Ok(json!({ "secretHash": hash }))
}

/// `xswap hashlock`
///
/// One secret gives the plain hash unless `merkle` asks for the one-leaf root.
pub fn hashlock(raw: &[String], merkle: bool) -> Result<Value> {
    let secrets = parse_secrets(raw)?;
    let (hash_lock, mode) = match secrets.as_slice() {
        [single] if !merkle => (commit_single(single), "single"),
        _ => (commit_multiple(&build_leaves(&secrets))?, "merkle"),
    };
    Ok(json!({ "hashLock": hash_lock, "mode": mode, "parts": secrets.len() }))
}

/// `xswap proof`
pub fn proof(raw_hashes: &[String], index: usize) -> Result<Value> {
    let hashes: Vec<SecretHash> = parse_all(raw_hashes, "secret hash")?;
    let leaves = build_leaves_from_hashes(&hashes);
    let proof = build_proof(&leaves, index)?;
    let root = commit_multiple(&leaves)?;
    debug!(index, siblings = proof.len(), "Proof built");

    Ok(json!({
        "index": index,
        "leaf": leaves[index],
        "proof": proof,
        "hashLock": root,
    }))
}

/// `xswap verify`
///
/// Without proof elements (and without `merkle`) the hash-lock is treated as a
/// plain secret hash. Prints `valid: false` on a mismatch; malformed input is
/// an error.
pub fn verify(
    secret: &str,
    index: usize,
    raw_proof: &[String],
    hash_lock: &str,
    merkle: bool,
) -> Result<Value> {
    let secret = parse_secret(secret).context("Invalid secret")?;
    let hash_lock: HashLock = hash_lock.parse().context("Invalid hash-lock")?;
    let siblings: Vec<MerkleNode> = parse_all(raw_proof, "proof element")?;

    let single = siblings.is_empty() && !merkle;
    let result = if single {
        anyhow::ensure!(index == 0, "single-fill hash-locks only have index 0");
        verify_secret(&secret, &hash_lock)
    } else {
        verify_fill(&secret, index, &MerkleProof::new(siblings), &hash_lock)
    };

    let mode = if single { "single" } else { "merkle" };
    match result {
        Ok(()) => Ok(json!({ "valid": true, "mode": mode })),
        Err(e) if e.is_verification_failure() => Ok(json!({
            "valid": false,
            "mode": mode,
            "reason": e.to_string(),
        })),
        Err(e) => Err(e.into()),
    }
}

/// `xswap stage`
pub fn stage(
    config: &CoordinatorConfig,
    deployed_at: u64,
    now: u64,
    side: Option<SideArg>,
) -> Result<Value> {
    let timelock = Timelock::new([0u8; 32], deployed_at, config.offsets)?;
    let sides: Vec<Side> = match side {
        Some(side) => vec![side.into()],
        None => vec![Side::Source, Side::Destination],
    };

    let reports: Vec<Value> = sides
        .into_iter()
        .map(|side| {
            let stage = classify(&timelock, side, now);
            let next = next_transition(&timelock, side, now)
                .map(|(stage, opens_at)| json!({ "stage": stage, "opensAt": opens_at }));
            json!({
                "side": side,
                "stage": stage,
                "permitted": stage.permitted_actions(),
                "next": next,
            })
        })
        .collect();

    Ok(json!({
        "deployedAt": deployed_at,
        "now": now,
        "elapsed": now.saturating_sub(deployed_at),
        "escrows": reports,
    }))
}
