//! Session switching and per-identity storage partitioning.

mod common;

use common::test_config;
use hear_hut_core::ProductId;
use hear_hut_storefront::models::CartItem;
use hear_hut_storefront::state::AppState;
use hear_hut_storefront::storage::MemoryStore;

const PASSWORD: &str = "SEcure!pass";

fn item(state: &AppState, product: &str) -> CartItem {
    CartItem::from_product(
        state
            .catalog()
            .get(&ProductId::from(product))
            .expect("catalog product"),
    )
}

#[test]
fn switching_identity_swaps_carts_without_merging() {
    let state = AppState::with_storage(test_config(), MemoryStore::default());

    // User A's cart holds X.
    state
        .auth()
        .sign_up("Asha", "asha@gmail.com", PASSWORD)
        .expect("sign up A");
    state.cart().add_item(item(&state, "hyperx-cloud-iii"));

    // Switch to user B, whose cart holds Y.
    state.auth().sign_out();
    state
        .auth()
        .sign_up("Bela", "bela@gmail.com", PASSWORD)
        .expect("sign up B");
    state.cart().add_item(item(&state, "jbl-flip-6"));

    // B sees exactly [Y] - no merge with A's cart.
    let visible = state.cart().active_cart();
    assert_eq!(visible.len(), 1);
    assert_eq!(
        visible.first().expect("line").product,
        ProductId::from("jbl-flip-6")
    );

    // Back to A: exactly [X] again.
    state.auth().sign_out();
    state
        .auth()
        .sign_in("asha@gmail.com", PASSWORD)
        .expect("sign in A");
    let visible = state.cart().active_cart();
    assert_eq!(visible.len(), 1);
    assert_eq!(
        visible.first().expect("line").product,
        ProductId::from("hyperx-cloud-iii")
    );
}

#[test]
fn guest_cart_is_isolated_from_user_carts() {
    let state = AppState::with_storage(test_config(), MemoryStore::default());

    state.cart().add_item(item(&state, "apple-airpods-4"));
    assert_eq!(state.cart().line_count(), 1);

    state
        .auth()
        .sign_up("Asha", "asha@gmail.com", PASSWORD)
        .expect("sign up");
    // Fresh user: their cart starts empty, the guest cart is not carried over.
    assert_eq!(state.cart().line_count(), 0);

    state.auth().sign_out();
    // The guest cart is waiting unchanged.
    assert_eq!(state.cart().line_count(), 1);
}

#[test]
fn wishlist_is_shared_across_identities() {
    let state = AppState::with_storage(test_config(), MemoryStore::default());
    let id = ProductId::from("marshall-minor-iv");

    state.wishlist().toggle(&id);
    state
        .auth()
        .sign_up("Asha", "asha@gmail.com", PASSWORD)
        .expect("sign up");

    // Unlike carts, the wishlist does not swap with the session.
    assert!(state.wishlist().contains(&id));
}
