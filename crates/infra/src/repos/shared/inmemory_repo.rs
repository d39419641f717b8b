use mailcast_domain::{Entity, ID};
use std::sync::Mutex;

/// Useful functions for creating inmemory repositories

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

pub fn save<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    for item in collection.iter_mut() {
        if item.id() == val.id() {
            *item = val.clone();
        }
    }
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    for item in collection.iter() {
        if item.id() == val_id {
            return Some(item.clone());
        }
    }
    None
}

pub fn find_by<T: Clone + Entity, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> Vec<T> {
    let collection = collection.lock().unwrap();
    let mut items = Vec::new();
    for item in collection.iter() {
        if compare(item) {
            items.push(item.clone());
        }
    }
    items
}

pub fn find_many<T: Clone + Entity>(val_ids: &[ID], collection: &Mutex<Vec<T>>) -> Vec<T> {
    find_by(collection, |item| val_ids.contains(item.id()))
}

pub fn delete<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = collection.lock().unwrap();
    let index = collection.iter().position(|item| item.id() == val_id)?;
    Some(collection.remove(index))
}

/// Applies `update` to the first item matching `compare` and returns the
/// updated item. Runs under a single lock acquisition, so a compare that
/// checks state and an update that changes it together form a conditional
/// update.
pub fn update_by<T, F, U>(collection: &Mutex<Vec<T>>, compare: F, update: U) -> Option<T>
where
    T: Clone + Entity,
    F: Fn(&T) -> bool,
    U: Fn(&mut T),
{
    let mut collection = collection.lock().unwrap();
    for item in collection.iter_mut() {
        if compare(item) {
            update(item);
            return Some(item.clone());
        }
    }
    None
}
