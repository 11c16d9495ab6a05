//! The entity store.
//!
//! Owns the four entity maps and all id allocation. Absence is reported as
//! `Option::None` or `false`, never as an error; persistence failures are
//! logged and swallowed so the in-memory state keeps serving (availability
//! over durability).

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};

use canteen_core::{
    ALL_CATEGORIES, NewOrder, NewOrderItem, NewProduct, NewUser, Order, OrderId, OrderItem,
    OrderItemId, OrderStatus, Product, ProductId, ProductPatch, User, UserId, UserPatch,
};

use crate::persist::{DataFile, KEY_APP_DATA, KEY_AVAILABLE_GROUPS};
use crate::snapshot::Snapshot;

/// The persistent entity store.
///
/// Construct once via [`Store::open`] and pass by reference to consumers.
/// All operations are synchronous; the caller is responsible for
/// sequencing access (single process, no internal locking).
pub struct Store {
    data: DataFile,

    users: HashMap<UserId, User>,
    products: HashMap<ProductId, Product>,
    orders: HashMap<OrderId, Order>,
    order_items: HashMap<OrderItemId, OrderItem>,

    /// Explicit group registry; empty means "derive from users".
    pub(crate) available_groups: Vec<String>,

    /// High-water mark for user ids; only consulted on the no-reuse path.
    next_user_id: i32,
    next_product_id: i32,
    next_order_id: i32,
    next_order_item_id: i32,

    /// Freed user ids eligible for reuse, kept sorted ascending.
    freed_user_ids: Vec<i32>,
}

impl Store {
    /// Open the store backed by the JSON document at `path`.
    ///
    /// A missing file starts an empty store; an unreadable or corrupt file
    /// is logged and likewise starts empty. Never fails - worst case the
    /// store serves a fresh state and overwrites the file on the next
    /// successful mutation.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let data = DataFile::new(path);

        if let Some(parent) = data.path().parent()
            && let Err(error) = fs::create_dir_all(parent)
        {
            tracing::warn!("could not create data directory {}: {error}", parent.display());
        }

        let mut store = Self {
            data,
            users: HashMap::new(),
            products: HashMap::new(),
            orders: HashMap::new(),
            order_items: HashMap::new(),
            available_groups: Vec::new(),
            next_user_id: 1,
            next_product_id: 1,
            next_order_id: 1,
            next_order_item_id: 1,
            freed_user_ids: Vec::new(),
        };

        match store.data.load::<Snapshot>(KEY_APP_DATA) {
            Ok(Some(snapshot)) => {
                store.restore(snapshot);
                tracing::info!(
                    "loaded {} users, {} products, {} orders from {}",
                    store.users.len(),
                    store.products.len(),
                    store.orders.len(),
                    store.data.path().display()
                );
            }
            Ok(None) => {
                tracing::info!("no data file at {}; starting empty", store.data.path().display());
            }
            Err(error) => {
                tracing::warn!("could not load data file, starting empty: {error}");
            }
        }

        match store.data.load::<Vec<String>>(KEY_AVAILABLE_GROUPS) {
            Ok(Some(groups)) => store.available_groups = groups,
            Ok(None) => {}
            Err(error) => {
                tracing::warn!("could not load group registry, starting empty: {error}");
            }
        }

        store
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.users = snapshot.users.into_iter().collect();
        self.products = snapshot.products.into_iter().collect();
        self.orders = snapshot.orders.into_iter().collect();
        self.order_items = snapshot.order_items.into_iter().collect();
        self.next_user_id = snapshot.user_id;
        self.next_product_id = snapshot.product_id;
        self.next_order_id = snapshot.order_id;
        self.next_order_item_id = snapshot.order_item_id;
        self.freed_user_ids = snapshot.deleted_user_ids;
        self.freed_user_ids.sort_unstable();
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            users: self.users.iter().map(|(id, u)| (*id, u.clone())).collect(),
            products: self.products.iter().map(|(id, p)| (*id, p.clone())).collect(),
            orders: self.orders.iter().map(|(id, o)| (*id, o.clone())).collect(),
            order_items: self
                .order_items
                .iter()
                .map(|(id, i)| (*id, i.clone()))
                .collect(),
            user_id: self.next_user_id,
            product_id: self.next_product_id,
            order_id: self.next_order_id,
            order_item_id: self.next_order_item_id,
            deleted_user_ids: self.freed_user_ids.clone(),
        }
    }

    /// Flush the entity snapshot to disk, keeping the in-memory state
    /// authoritative if the write fails.
    pub(crate) fn persist(&self) {
        if let Err(error) = self.data.save(KEY_APP_DATA, &self.snapshot()) {
            tracing::error!("failed to persist snapshot, serving unsaved state: {error}");
        }
    }

    pub(crate) const fn data(&self) -> &DataFile {
        &self.data
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Look up a user by id.
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<User> {
        self.users.get(&id).cloned()
    }

    /// Look up a user by exact username.
    #[must_use]
    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.users.values().find(|u| u.username == username).cloned()
    }

    /// All users, in unspecified order. Callers sort as needed.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    /// Create a user, assigning the smallest freed id, or the next
    /// sequential one when none are free.
    ///
    /// Role flags are taken from the caller as-is; privileged bootstrap
    /// accounts are created by the explicit [`seed`](crate::seed) step, not
    /// special-cased here. Username uniqueness is the caller's pre-check -
    /// the store does not reject duplicates.
    pub fn create_user(&mut self, new_user: NewUser) -> User {
        let id = self.allocate_user_id();

        let user = User {
            id,
            username: new_user.username,
            password: new_user.password,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            group_name: new_user.group_name,
            email: new_user.email,
            is_coordinator: new_user.is_coordinator,
            is_admin: new_user.is_admin,
            is_user_admin: new_user.is_user_admin,
        };

        self.users.insert(id, user.clone());
        self.persist();
        user
    }

    /// Smallest-freed-id-first allocation; falls back to max + 1.
    ///
    /// The in-memory free-list is the single source of truth; the persisted
    /// copy only carries it across restarts.
    fn allocate_user_id(&mut self) -> UserId {
        let id = if self.freed_user_ids.is_empty() {
            self.users
                .keys()
                .map(|id| id.as_i32())
                .max()
                .unwrap_or(0)
                + 1
        } else {
            self.freed_user_ids.sort_unstable();
            let id = self.freed_user_ids.remove(0);
            tracing::debug!("reusing freed user id {id}");
            id
        };

        if id >= self.next_user_id {
            self.next_user_id = id + 1;
        }

        UserId::new(id)
    }

    /// Shallow-merge `patch` over the stored user.
    ///
    /// Returns `None` if the id is unknown.
    pub fn update_user(&mut self, id: UserId, patch: UserPatch) -> Option<User> {
        let user = self.users.get_mut(&id)?;
        user.apply(patch);
        let updated = user.clone();
        self.persist();
        Some(updated)
    }

    /// Delete a user, cascading to their orders and those orders' items,
    /// then record the freed id for reuse.
    ///
    /// Returns `false` if the id is unknown.
    pub fn delete_user(&mut self, id: UserId) -> bool {
        if !self.users.contains_key(&id) {
            tracing::debug!("delete_user: user {id} not found");
            return false;
        }

        let order_ids: Vec<OrderId> = self
            .orders
            .values()
            .filter(|order| order.user_id == id)
            .map(|order| order.id)
            .collect();
        for order_id in &order_ids {
            self.order_items.retain(|_, item| item.order_id != *order_id);
            self.orders.remove(order_id);
        }

        self.users.remove(&id);

        let raw = id.as_i32();
        if !self.freed_user_ids.contains(&raw) {
            self.freed_user_ids.push(raw);
        }
        self.freed_user_ids.sort_unstable();
        tracing::debug!(
            "deleted user {id} with {} orders; freed ids now {:?}",
            order_ids.len(),
            self.freed_user_ids
        );

        self.persist();
        true
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// All products, in unspecified order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    /// Products in `category`. The reserved value `"All"` matches every
    /// product; it is a query wildcard, never a stored category.
    #[must_use]
    pub fn products_by_category(&self, category: &str) -> Vec<Product> {
        if category == ALL_CATEGORIES {
            return self.products();
        }
        self.products
            .values()
            .filter(|product| product.category == category)
            .cloned()
            .collect()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<Product> {
        self.products.get(&id).cloned()
    }

    /// Create a product with the next sequential id (never recycled).
    pub fn create_product(&mut self, new_product: NewProduct) -> Product {
        let id = ProductId::new(self.next_product_id);
        self.next_product_id += 1;

        let product = Product {
            id,
            name: new_product.name,
            description: new_product.description,
            price: new_product.price,
            category: new_product.category,
            available: new_product.available.unwrap_or(true),
        };

        self.products.insert(id, product.clone());
        self.persist();
        product
    }

    /// Shallow-merge `patch` over the stored product.
    pub fn update_product(&mut self, id: ProductId, patch: ProductPatch) -> Option<Product> {
        let product = self.products.get_mut(&id)?;
        product.apply(patch);
        let updated = product.clone();
        self.persist();
        Some(updated)
    }

    /// Delete a product. No cascade - existing order items keep their
    /// price/quantity snapshot.
    pub fn delete_product(&mut self, id: ProductId) -> bool {
        if self.products.remove(&id).is_none() {
            return false;
        }
        self.persist();
        true
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// All orders, in unspecified order.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.orders.values().cloned().collect()
    }

    /// Look up an order by id.
    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<Order> {
        self.orders.get(&id).cloned()
    }

    /// Orders placed by `user_id`.
    #[must_use]
    pub fn orders_by_user(&self, user_id: UserId) -> Vec<Order> {
        self.orders
            .values()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Orders whose order date falls on the given UTC calendar day.
    #[must_use]
    pub fn orders_by_date(&self, date: NaiveDate) -> Vec<Order> {
        self.orders
            .values()
            .filter(|order| order.order_date.date_naive() == date)
            .cloned()
            .collect()
    }

    /// Orders whose owning user belongs to `group_name`, compared
    /// case-insensitively. Orders whose owner no longer exists, or whose
    /// group does not match, are silently excluded.
    #[must_use]
    pub fn orders_by_group(&self, group_name: &str) -> Vec<Order> {
        self.orders
            .values()
            .filter(|order| {
                self.users
                    .get(&order.user_id)
                    .is_some_and(|user| user.group_name.matches_ignore_case(group_name))
            })
            .cloned()
            .collect()
    }

    /// Create an order. Status defaults to `"pending"`, `created_at` is
    /// stamped now, and `order_date` defaults to the creation time.
    pub fn create_order(&mut self, new_order: NewOrder) -> Order {
        let id = OrderId::new(self.next_order_id);
        self.next_order_id += 1;

        let created_at = Utc::now();
        let order = Order {
            id,
            user_id: new_order.user_id,
            status: new_order
                .status
                .unwrap_or_else(|| OrderStatus::Pending.as_str().to_owned()),
            total: new_order.total,
            created_at,
            order_date: new_order.order_date.unwrap_or(created_at),
        };

        self.orders.insert(id, order.clone());
        self.persist();
        order
    }

    /// Overwrite an order's status unconditionally.
    ///
    /// Any string is accepted - there is no state machine and no validation
    /// against the well-known values; that belongs to calling layers.
    pub fn update_order_status(&mut self, id: OrderId, status: &str) -> Option<Order> {
        let order = self.orders.get_mut(&id)?;
        order.status = status.to_owned();
        let updated = order.clone();
        self.persist();
        Some(updated)
    }

    // =========================================================================
    // Order items
    // =========================================================================

    /// Items belonging to `order_id`.
    #[must_use]
    pub fn order_items(&self, order_id: OrderId) -> Vec<OrderItem> {
        self.order_items
            .values()
            .filter(|item| item.order_id == order_id)
            .cloned()
            .collect()
    }

    /// Append an order item with the next sequential id. Neither the order
    /// nor the product id is checked for existence.
    pub fn create_order_item(&mut self, new_item: NewOrderItem) -> OrderItem {
        let id = OrderItemId::new(self.next_order_item_id);
        self.next_order_item_id += 1;

        let item = OrderItem {
            id,
            order_id: new_item.order_id,
            product_id: new_item.product_id,
            quantity: new_item.quantity,
            price: new_item.price,
        };

        self.order_items.insert(id, item.clone());
        self.persist();
        item
    }
}
