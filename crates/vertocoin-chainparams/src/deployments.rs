use core::fmt;
use core::ops::Index;
use core::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::constants::VERSIONBITS_NUM_BITS;
use crate::error::{OptionsError, ParamsError};

/// Soft forks activated through versionbits signaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentPos {
    TestDummy,
    Taproot,
}

impl DeploymentPos {
    pub const COUNT: usize = 2;
    pub const ALL: [DeploymentPos; DeploymentPos::COUNT] =
        [DeploymentPos::TestDummy, DeploymentPos::Taproot];

    pub fn as_str(self) -> &'static str {
        match self {
            DeploymentPos::TestDummy => "testdummy",
            DeploymentPos::Taproot => "taproot",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DeploymentPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentPos {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeploymentPos::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| OptionsError::UnknownDeployment(s.to_string()))
    }
}

/// Soft forks enforced from a fixed height, with no signaling left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum BuriedDeployment {
    /// BIP34: block height in the coinbase.
    #[serde(rename = "bip34")]
    HeightInCb,
    /// BIP65: OP_CHECKLOCKTIMEVERIFY.
    #[serde(rename = "cltv")]
    Cltv,
    /// BIP66: strict DER signatures.
    #[serde(rename = "dersig")]
    DerSig,
    /// BIP68/112/113: relative lock-time.
    #[serde(rename = "csv")]
    Csv,
    #[serde(rename = "segwit")]
    Segwit,
}

impl BuriedDeployment {
    pub const ALL: [BuriedDeployment; 5] = [
        BuriedDeployment::HeightInCb,
        BuriedDeployment::Cltv,
        BuriedDeployment::DerSig,
        BuriedDeployment::Csv,
        BuriedDeployment::Segwit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BuriedDeployment::HeightInCb => "bip34",
            BuriedDeployment::Cltv => "cltv",
            BuriedDeployment::DerSig => "dersig",
            BuriedDeployment::Csv => "csv",
            BuriedDeployment::Segwit => "segwit",
        }
    }
}

impl fmt::Display for BuriedDeployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuriedDeployment {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuriedDeployment::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| OptionsError::UnknownDeployment(s.to_string()))
    }
}

/// When signaling for a deployment may begin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StartTime {
    /// Median time past at which the deployment enters STARTED.
    At(i64),
    /// Active from genesis; no signaling period.
    AlwaysActive,
    /// Never starts.
    NeverActive,
}

impl StartTime {
    pub const RAW_ALWAYS_ACTIVE: i64 = -1;
    pub const RAW_NEVER_ACTIVE: i64 = -2;

    /// Decodes the integer form used on the command line.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            Self::RAW_ALWAYS_ACTIVE => StartTime::AlwaysActive,
            Self::RAW_NEVER_ACTIVE => StartTime::NeverActive,
            t => StartTime::At(t),
        }
    }

    pub fn to_raw(self) -> i64 {
        match self {
            StartTime::At(t) => t,
            StartTime::AlwaysActive => Self::RAW_ALWAYS_ACTIVE,
            StartTime::NeverActive => Self::RAW_NEVER_ACTIVE,
        }
    }
}

/// When an unactivated deployment fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeout {
    At(i64),
    NoTimeout,
}

impl Timeout {
    pub const RAW_NO_TIMEOUT: i64 = i64::MAX;

    pub fn from_raw(raw: i64) -> Self {
        if raw == Self::RAW_NO_TIMEOUT {
            Timeout::NoTimeout
        } else {
            Timeout::At(raw)
        }
    }

    pub fn to_raw(self) -> i64 {
        match self {
            Timeout::At(t) => t,
            Timeout::NoTimeout => Self::RAW_NO_TIMEOUT,
        }
    }
}

/// Parameters of one BIP9 deployment. Only the inputs of the versionbits
/// state machine live here, not the machine itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Bip9Deployment {
    /// Version bit used for signaling, below [`VERSIONBITS_NUM_BITS`].
    pub bit: u8,
    pub start: StartTime,
    pub timeout: Timeout,
    /// Earliest height at which a locked-in deployment becomes active.
    pub min_activation_height: u32,
    /// Signaling blocks per period needed to lock in.
    pub threshold: u32,
    /// Retarget-aligned window length in blocks.
    pub period: u32,
}

impl Bip9Deployment {
    /// Version bit mask for this deployment.
    pub fn mask(&self) -> u32 {
        1u32 << self.bit
    }

    pub fn is_always_active(&self) -> bool {
        self.start == StartTime::AlwaysActive
    }

    pub fn is_never_active(&self) -> bool {
        self.start == StartTime::NeverActive
    }

    pub fn validate(&self, pos: DeploymentPos) -> Result<(), ParamsError> {
        if self.bit >= VERSIONBITS_NUM_BITS {
            return Err(ParamsError::DeploymentBitRange {
                deployment: pos,
                bit: self.bit,
            });
        }
        if self.period == 0 {
            return Err(ParamsError::DeploymentPeriod { deployment: pos });
        }
        if self.threshold > self.period {
            return Err(ParamsError::DeploymentThreshold {
                deployment: pos,
                threshold: self.threshold,
                period: self.period,
            });
        }
        Ok(())
    }
}

/// Deployment table indexed by [`DeploymentPos`]. Every position is always
/// populated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deployments([Bip9Deployment; DeploymentPos::COUNT]);

impl Deployments {
    pub fn new(test_dummy: Bip9Deployment, taproot: Bip9Deployment) -> Self {
        Self([test_dummy, taproot])
    }

    pub fn get(&self, pos: DeploymentPos) -> &Bip9Deployment {
        &self.0[pos.index()]
    }

    pub(crate) fn get_mut(&mut self, pos: DeploymentPos) -> &mut Bip9Deployment {
        &mut self.0[pos.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeploymentPos, &Bip9Deployment)> + '_ {
        DeploymentPos::ALL.into_iter().zip(self.0.iter())
    }

    /// Checks every entry and that no two deployments share a bit.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let mut owner: [Option<DeploymentPos>; VERSIONBITS_NUM_BITS as usize] =
            [None; VERSIONBITS_NUM_BITS as usize];
        for (pos, d) in self.iter() {
            d.validate(pos)?;
            let slot = &mut owner[d.bit as usize];
            if let Some(first) = *slot {
                return Err(ParamsError::DuplicateBit {
                    bit: d.bit,
                    first,
                    second: pos,
                });
            }
            *slot = Some(pos);
        }
        Ok(())
    }
}

impl Index<DeploymentPos> for Deployments {
    type Output = Bip9Deployment;

    fn index(&self, pos: DeploymentPos) -> &Bip9Deployment {
        self.get(pos)
    }
}

impl Serialize for Deployments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DeploymentPos::COUNT))?;
        for (pos, d) in self.iter() {
            map.serialize_entry(pos.as_str(), d)?;
        }
        map.end()
    }
}
