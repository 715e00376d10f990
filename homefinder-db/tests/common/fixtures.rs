//! Record builders for tests

use homefinder_db::{Database, NewMessage, NewProperty, NewUser, Property, User};

pub fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password: "h1".to_string(),
    }
}

pub fn new_listing(owner_id: i32, price: i32) -> NewProperty {
    NewProperty {
        owner_id,
        title: format!("Listing at {}", price),
        description: Some("Bright and close to transit".to_string()),
        photo_url_1: Some("https://img.example/front.jpg".to_string()),
        photo_url_2: None,
        photo_url_3: None,
        photo_url_4: None,
        photo_url_5: Some("https://img.example/yard.jpg".to_string()),
        price,
        parking_spaces: 1,
        number_of_bathrooms: 2,
        number_of_bedrooms: 3,
        street: "12 Main St".to_string(),
        city: "Halifax".to_string(),
        province: "NS".to_string(),
        post_code: "B3H 1A1".to_string(),
        sold: false,
    }
}

pub fn new_message(sender_id: i32, receiver_id: i32, content: &str) -> NewMessage {
    NewMessage {
        sender_id,
        receiver_id,
        content: content.to_string(),
    }
}

pub async fn create_user(db: &Database, name: &str, email: &str) -> User {
    db.users()
        .create(&new_user(name, email))
        .await
        .expect("create user failed")
}

pub async fn create_listing(db: &Database, owner_id: i32, price: i32) -> Property {
    db.properties()
        .create(&new_listing(owner_id, price))
        .await
        .expect("create property failed")
}
