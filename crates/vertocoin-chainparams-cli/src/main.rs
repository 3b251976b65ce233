use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vertocoin_chainparams::{
    network_for_magic, ChainParams, ChainType, ConsensusParams, ErrorCode, GenesisIdentity,
    MessageStart, OptionsError, RegTestOptions, SigNetOptions,
};

#[derive(Deserialize)]
struct Request {
    op: String,

    #[serde(default)]
    chain: String,

    #[serde(default)]
    magic: String,

    /// `-testactivationheight` values, `name@height`.
    #[serde(default)]
    testactivationheight: Vec<String>,

    /// `-vbparams` values, `deployment:start:end[:min_activation_height]`.
    #[serde(default)]
    vbparams: Vec<String>,

    #[serde(default)]
    signetchallenge: Vec<String>,

    #[serde(default)]
    signetseednode: Vec<String>,

    #[serde(default)]
    fastprune: bool,

    #[serde(default)]
    bip94: bool,
}

#[derive(Default, Serialize)]
struct Response {
    ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    err: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    chain: Option<ChainType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    magic: Option<MessageStart>,

    #[serde(skip_serializing_if = "Option::is_none")]
    default_port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    bech32_hrp: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    genesis_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    merkle_root: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    genesis_identity: Option<GenesisIdentity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    block_hex: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot_heights: Option<Vec<u32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    consensus: Option<ConsensusParams>,
}

impl Response {
    fn error(code: ErrorCode, detail: impl ToString) -> Self {
        Self {
            ok: false,
            err: Some(code.as_str().to_string()),
            detail: Some(detail.to_string()),
            ..Self::default()
        }
    }

    fn bad_request(detail: impl ToString) -> Self {
        Self {
            ok: false,
            err: Some("bad request".to_string()),
            detail: Some(detail.to_string()),
            ..Self::default()
        }
    }
}

impl From<OptionsError> for Response {
    fn from(e: OptionsError) -> Self {
        Self::error(e.code(), e)
    }
}

fn build_params(req: &Request) -> Result<Arc<ChainParams>, Response> {
    let chain: ChainType = req.chain.parse()?;
    let params = match chain {
        ChainType::Signet => {
            let opts = SigNetOptions::from_args(&req.signetchallenge, &req.signetseednode)?;
            ChainParams::try_signet(&opts)
        }
        ChainType::Regtest => {
            let mut opts = RegTestOptions::from_args(&req.testactivationheight, &req.vbparams)?;
            opts.fastprune = req.fastprune;
            opts.enforce_bip94 = req.bip94;
            ChainParams::try_regtest(&opts)
        }
        other => ChainParams::try_for_chain(other),
    };
    params.map_err(|e| Response::error(e.code(), e))
}

fn handle(req: &Request) -> Response {
    match req.op.as_str() {
        "chain_params" => match build_params(req) {
            Ok(p) => Response {
                ok: true,
                chain: Some(p.chain_type()),
                magic: Some(p.message_start()),
                default_port: Some(p.default_port()),
                bech32_hrp: Some(p.bech32_hrp().to_string()),
                genesis_hash: Some(p.genesis_hash().to_string()),
                genesis_identity: Some(p.genesis_identity()),
                consensus: Some(p.consensus().clone()),
                ..Response::default()
            },
            Err(resp) => resp,
        },
        "genesis_block" => match build_params(req) {
            Ok(p) => {
                let genesis = p.genesis_block();
                Response {
                    ok: true,
                    chain: Some(p.chain_type()),
                    genesis_hash: Some(genesis.block_hash().to_string()),
                    merkle_root: Some(genesis.header.merkle_root.to_string()),
                    block_hex: Some(hex::encode(genesis.serialize())),
                    ..Response::default()
                }
            }
            Err(resp) => resp,
        },
        "snapshot_heights" => match build_params(req) {
            Ok(p) => Response {
                ok: true,
                chain: Some(p.chain_type()),
                snapshot_heights: Some(p.available_snapshot_heights()),
                ..Response::default()
            },
            Err(resp) => resp,
        },
        "network_for_magic" => {
            let magic: MessageStart = match req.magic.parse() {
                Ok(m) => m,
                Err(e) => return Response::bad_request(format!("magic: {e}")),
            };
            Response {
                ok: true,
                chain: network_for_magic(&magic),
                magic: Some(magic),
                ..Response::default()
            }
        }
        other => Response::bad_request(format!("unknown op: {other}")),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn main() {
    init_tracing();

    let resp = match serde_json::from_reader::<_, Request>(std::io::stdin()) {
        Ok(req) => {
            tracing::debug!(op = %req.op, chain = %req.chain, "request");
            handle(&req)
        }
        Err(e) => Response::bad_request(e),
    };
    let _ = serde_json::to_writer(std::io::stdout(), &resp);
}
