use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, SignupRequest},
        cart::{
            AddToCartRequest, CartView, QuantityUpdate, SelectLinesRequest, SelectionView,
            UpdateQuantityRequest,
        },
        notifications::{MarkAllRead, NotificationList},
        orders::{CheckoutRequest, OrderList},
        products::{CategoryList, ProductList, ProductView, UpdateStockRequest},
    },
    models::{
        CartLine, Category, NewProduct, Notification, NotificationType, Order, OrderItem,
        OrderStatus, Priority, Product, ProductStatus, Role, Session, StockStatus,
    },
    response::{ApiResponse, Meta},
    routes::{admin, auth, cart, health, notifications, orders, params, products},
    store::{
        CartSummary, CategoryStock, InventorySummary, NotificationFilter, OrderStats, OrderTab,
        ProductSort, SessionOverview,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("session token")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::signup,
        auth::logout,
        auth::session,
        products::list_products,
        products::list_categories,
        products::get_product,
        cart::cart_view,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart,
        cart::select_lines,
        cart::toggle_select_all,
        cart::toggle_line,
        orders::list_orders,
        orders::order_stats,
        orders::checkout,
        orders::get_order,
        orders::cancel_order,
        admin::create_product,
        admin::update_product,
        admin::delete_product,
        admin::update_stock,
        admin::list_low_stock,
        admin::inventory_summary,
        notifications::list_notifications,
        notifications::mark_read,
        notifications::mark_all_read,
        notifications::delete_notification
    ),
    components(
        schemas(
            Session,
            Role,
            Product,
            NewProduct,
            Category,
            ProductStatus,
            StockStatus,
            CartLine,
            Order,
            OrderItem,
            OrderStatus,
            Notification,
            NotificationType,
            Priority,
            LoginRequest,
            SignupRequest,
            LoginResponse,
            SessionOverview,
            AddToCartRequest,
            UpdateQuantityRequest,
            SelectLinesRequest,
            CartView,
            CartSummary,
            SelectionView,
            QuantityUpdate,
            CheckoutRequest,
            OrderList,
            OrderStats,
            OrderTab,
            ProductView,
            ProductList,
            CategoryList,
            UpdateStockRequest,
            ProductSort,
            InventorySummary,
            CategoryStock,
            NotificationList,
            NotificationFilter,
            MarkAllRead,
            params::Pagination,
            Meta,
            ApiResponse<ProductView>,
            ApiResponse<ProductList>,
            ApiResponse<CartView>,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<NotificationList>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Mock session endpoints"),
        (name = "Products", description = "Catalog browsing"),
        (name = "Cart", description = "Cart and checkout selection"),
        (name = "Orders", description = "Checkout and order history"),
        (name = "Admin", description = "Catalog and inventory management"),
        (name = "Notifications", description = "Notification feed"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
