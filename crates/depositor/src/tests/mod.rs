//! Scenarios exercising the [`DepositorController`] against mock collaborators.


use bitcoin::Amount;
use ethnum::U256;
use tbtc_depositor_db::inmemory::InMemoryDepositRegistry;
use tbtc_depositor_params::prelude::DepositorParams;
use tbtc_depositor_primitives::{
    bitcoin_tx::{BitcoinTxInfo, DepositRevealInfo},
    records::DepositParameters,
    types::{Address, DepositKey, ExtraData},
};
use tbtc_depositor_test_utils::prelude::{generate_deposit_reveal, generate_extra_data};

use crate::{
    controller::DepositorController,
    testing::{FixedClock, MockBridge, MockVault, RecordingFinalizer},
};

// ===== Test Constants =====

/// Address of the Bridge in tests.
pub(super) const TEST_BRIDGE: Address = Address::new([0x11; 20]);
/// Address of the configured Vault in tests.
pub(super) const TEST_VAULT: Address = Address::new([0x22; 20]);
/// Address of a Vault other than the configured one.
pub(super) const OTHER_VAULT: Address = Address::new([0x33; 20]);
/// Address of the account that reveals deposits in tests.
pub(super) const TEST_DEPOSITOR: Address = Address::new([0x44; 20]);
/// Time reported by the clock of the controller and by the Bridge.
pub(super) const NOW: u32 = 1_700_000_000;
/// Time at which deposits are swept in tests.
pub(super) const SWEPT_AT: u32 = NOW + 3_600;
/// Time at which deposits are minted optimistically in tests.
pub(super) const OPTIMISTICALLY_MINTED_AT: u64 = NOW as u64 + 600;
/// Optimistic minting fee divisor used by the Vault in tests (2%).
pub(super) const TEST_MINTING_FEE_DIVISOR: u32 = 50;
/// Amount deposited in most tests.
pub(super) const TEST_DEPOSIT_AMOUNT: Amount = Amount::ONE_BTC;

/// Amount minted for [`TEST_DEPOSIT_AMOUNT`] with [`test_deposit_parameters`] and
/// [`TEST_MINTING_FEE_DIVISOR`]:
///
/// - treasury fee: 1_000_000 sat
/// - net: 0.99 BTC -> 990_000_000_000_000_000
/// - minting fee: 990_000_000_000_000_000 / 50 = 19_800_000_000_000_000
/// - max tx fee: 100_000 sat -> 1_000_000_000_000_000
pub(super) const EXPECTED_TBTC_AMOUNT: u128 = 969_200_000_000_000_000;

/// Deposit parameters reported by the Bridge in tests.
pub(super) fn test_deposit_parameters() -> DepositParameters {
    DepositParameters {
        deposit_dust_threshold: Amount::from_sat(1_000_000),
        deposit_treasury_fee_divisor: 100,
        deposit_tx_max_fee: Amount::from_sat(100_000),
        deposit_reveal_ahead_period: 30 * 24 * 60 * 60,
    }
}

pub(super) type TestController = DepositorController<
    MockBridge,
    MockVault,
    InMemoryDepositRegistry,
    RecordingFinalizer,
    FixedClock,
>;

/// A controller together with handles to its collaborators.
pub(super) struct TestContext {
    pub(super) controller: TestController,
    pub(super) bridge: MockBridge,
    pub(super) vault: MockVault,
    pub(super) registry: InMemoryDepositRegistry,
    pub(super) finalizer: RecordingFinalizer,
}

impl TestContext {
    pub(super) fn new() -> Self {
        let registry = InMemoryDepositRegistry::new();
        let bridge = MockBridge::new(
            test_deposit_parameters(),
            registry.clone(),
            TEST_DEPOSITOR,
            NOW,
        );
        let vault = MockVault::new(TEST_MINTING_FEE_DIVISOR);
        let finalizer = RecordingFinalizer::new(registry.clone());

        let params =
            DepositorParams::new(TEST_BRIDGE, TEST_VAULT).expect("test addresses must be valid");
        let controller = DepositorController::with_clock(
            params,
            bridge.clone(),
            vault.clone(),
            registry.clone(),
            finalizer.clone(),
            FixedClock(NOW),
        );

        Self {
            controller,
            bridge,
            vault,
            registry,
            finalizer,
        }
    }

    /// Creates another controller over the same collaborators and registry.
    pub(super) fn sibling_controller(&self) -> TestController {
        DepositorController::with_clock(
            *self.controller.params(),
            self.bridge.clone(),
            self.vault.clone(),
            self.registry.clone(),
            self.finalizer.clone(),
            FixedClock(NOW),
        )
    }

    /// Initializes `deposit`, which must succeed.
    pub(super) async fn initialize(&mut self, deposit: &TestDeposit) -> DepositKey {
        self.controller
            .initialize_deposit(&deposit.funding_tx, &deposit.reveal, deposit.extra_data)
            .await
            .expect("initialization must succeed")
            .deposit_key
    }
}

/// A fresh deposit of `amount` routed to the configured Vault.
pub(super) struct TestDeposit {
    pub(super) funding_tx: BitcoinTxInfo,
    pub(super) reveal: DepositRevealInfo,
    pub(super) extra_data: ExtraData,
}

impl TestDeposit {
    pub(super) fn new(amount: Amount) -> Self {
        let (funding_tx, reveal) = generate_deposit_reveal(amount, TEST_VAULT);

        Self {
            funding_tx,
            reveal,
            extra_data: generate_extra_data(),
        }
    }
}

/// Scales a satoshi amount to 18 decimals.
pub(super) fn scaled(sats: u64) -> U256 {
    U256::from(sats) * U256::from(10_000_000_000u64)
}
