mod common;

use common::fixtures::{create_listing, create_user, new_listing};
use common::TestDb;
use homefinder_db::{DbError, LISTING_PAGE_LIMIT};

#[tokio::test]
#[ignore = "requires database"]
async fn alice_listing_found_by_range_and_detail() {
    let t = TestDb::new().await;
    let alice = create_user(&t.db, "Alice", "a@x.com").await;
    let listing = create_listing(&t.db, alice.u_id, 250_000).await;
    assert!(!listing.sold);

    let in_range = t
        .db
        .properties()
        .list_by_price_range(200_000, 300_000)
        .await
        .unwrap();
    assert_eq!(in_range, vec![listing.clone()]);

    let detail = t
        .db
        .properties()
        .find_with_owner(listing.property_id)
        .await
        .unwrap()
        .expect("property missing");
    assert_eq!(detail.owner, "Alice");
    assert_eq!(detail.property, listing);

    t.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn price_range_is_half_open_sorted_and_capped() {
    let t = TestDb::new().await;
    let owner = create_user(&t.db, "Owner", "o@x.com").await;

    // Boundaries on both ends, plus more in-range rows than one page holds
    create_listing(&t.db, owner.u_id, 99_999).await;
    create_listing(&t.db, owner.u_id, 200_000).await;
    for i in (0..25).rev() {
        create_listing(&t.db, owner.u_id, 100_000 + i * 1_000).await;
    }

    let found = t
        .db
        .properties()
        .list_by_price_range(100_000, 200_000)
        .await
        .unwrap();

    assert_eq!(found.len(), LISTING_PAGE_LIMIT as usize);
    assert!(found.iter().all(|p| p.price >= 100_000 && p.price < 200_000));
    assert!(found.windows(2).all(|w| w[0].price <= w[1].price));
    assert_eq!(found[0].price, 100_000);

    t.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn inverted_range_is_empty() {
    let t = TestDb::new().await;
    let owner = create_user(&t.db, "Owner", "o@x.com").await;
    create_listing(&t.db, owner.u_id, 150_000).await;

    let found = t
        .db
        .properties()
        .list_by_price_range(300_000, 100_000)
        .await
        .unwrap();
    assert!(found.is_empty());

    t.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn owner_listings_returned_as_sequence() {
    let t = TestDb::new().await;
    let alice = create_user(&t.db, "Alice", "a@x.com").await;
    let bob = create_user(&t.db, "Bob", "b@x.com").await;
    let first = create_listing(&t.db, alice.u_id, 100_000).await;
    let second = create_listing(&t.db, alice.u_id, 400_000).await;
    create_listing(&t.db, bob.u_id, 300_000).await;

    let owned = t.db.properties().list_for_owner(alice.u_id).await.unwrap();
    assert_eq!(owned, vec![first, second]);

    let none = t.db.properties().list_for_owner(9999).await.unwrap();
    assert!(none.is_empty());

    t.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn create_stores_every_column() {
    let t = TestDb::new().await;
    let owner = create_user(&t.db, "Owner", "o@x.com").await;

    let mut input = new_listing(owner.u_id, 325_000);
    input.photo_url_3 = Some("https://img.example/kitchen.jpg".to_string());
    input.sold = true;

    let created = t.db.properties().create(&input).await.unwrap();
    assert_eq!(created.owner_id, owner.u_id);
    assert_eq!(created.title, input.title);
    assert_eq!(created.description, input.description);
    assert_eq!(
        created.photo_urls().collect::<Vec<_>>(),
        [
            "https://img.example/front.jpg",
            "https://img.example/kitchen.jpg",
            "https://img.example/yard.jpg",
        ]
    );
    assert_eq!(created.price, 325_000);
    assert_eq!(created.parking_spaces, 1);
    assert_eq!(created.number_of_bathrooms, 2);
    assert_eq!(created.number_of_bedrooms, 3);
    assert_eq!(created.post_code, "B3H 1A1");
    assert!(created.sold);

    t.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn create_for_unknown_owner_propagates() {
    let t = TestDb::new().await;

    let err = t
        .db
        .properties()
        .create(&new_listing(9999, 100_000))
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::Constraint { .. }), "unexpected error: {err:?}");

    t.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn mark_sold_is_idempotent() {
    let t = TestDb::new().await;
    let owner = create_user(&t.db, "Owner", "o@x.com").await;
    let listing = create_listing(&t.db, owner.u_id, 180_000).await;

    let first = t.db.properties().mark_sold(listing.property_id).await.unwrap();
    let second = t.db.properties().mark_sold(listing.property_id).await.unwrap();

    assert!(first.expect("property missing").sold);
    assert!(second.expect("property missing").sold);
    assert!(t.db.properties().mark_sold(9999).await.unwrap().is_none());

    t.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn delete_returns_removed_row_once() {
    let t = TestDb::new().await;
    let owner = create_user(&t.db, "Owner", "o@x.com").await;
    let listing = create_listing(&t.db, owner.u_id, 500_000).await;

    let deleted = t.db.properties().delete(listing.property_id).await.unwrap();
    assert_eq!(deleted, Some(listing.clone()));

    let again = t.db.properties().delete(listing.property_id).await.unwrap();
    assert!(again.is_none());
    assert!(t
        .db
        .properties()
        .find_with_owner(listing.property_id)
        .await
        .unwrap()
        .is_none());

    t.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn bootstrap_schema_does_not_cascade_deletes() {
    let t = TestDb::new().await;
    let owner = create_user(&t.db, "Owner", "o@x.com").await;
    let listing = create_listing(&t.db, owner.u_id, 275_000).await;
    t.db
        .favourites()
        .add(owner.u_id, listing.property_id)
        .await
        .unwrap();

    let err = sqlx::query("DELETE FROM users WHERE u_id = $1")
        .bind(owner.u_id)
        .execute(t.db.pool())
        .await
        .map_err(DbError::from)
        .unwrap_err();
    assert!(matches!(err, DbError::Constraint { .. }), "unexpected error: {err:?}");

    let err = t
        .db
        .properties()
        .delete(listing.property_id)
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::Constraint { .. }), "unexpected error: {err:?}");

    assert_eq!(t.db.properties().list_for_owner(owner.u_id).await.unwrap(), vec![listing]);

    t.teardown().await;
}
