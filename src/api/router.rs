//! API router with Swagger UI

use axum::extract::State;
use axum::routing::{get, post, put};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::*;
use crate::api::handlers::{assignments, cages, health, AppState};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Cages
        cages::list_cages,
        cages::available_cages,
        cages::create_cage,
        cages::get_cage,
        cages::update_cage,
        cages::delete_cage,
        cages::enter_maintenance,
        cages::complete_maintenance,
        cages::reserve,
        cages::cancel_reservation,
        // Assignments
        assignments::assign_cage,
        assignments::checkout_assignment,
        assignments::get_assignment,
        assignments::assignment_cost,
        assignments::cage_assignments,
        assignments::current_assignment,
        assignments::active_assignments,
    ),
    components(
        schemas(
            ApiResponse<String>,
            PaginatedResponse<AssignmentDto>,
            PaginationParams,
            CageDto,
            CreateCageRequest,
            UpdateCageRequest,
            AssignmentDto,
            AssignCageRequest,
            CheckOutRequest,
            StayCostDto,
            health::HealthStatus,
        )
    ),
    tags(
        (name = "Health", description = "Service liveness."),
        (name = "Cages", description = "Boarding cage registry: CRUD plus the status transitions \
            (`maintenance`, `complete-maintenance`, `reserve`, `cancel-reservation`). Statuses: \
            `Available`, `Occupied`, `Maintenance`, `Reserved`, `OutOfService`. Deleting a cage \
            decommissions it; the row and its number are kept forever."),
        (name = "Assignments", description = "Boarding stays: check-in creates an active assignment \
            and occupies the cage, check-out closes it and frees the cage. The per-day rate is \
            snapshotted at check-in, so later list-price changes never affect a stay's cost."),
    ),
    info(
        title = "Clinic Boarding Service API",
        version = "1.0.0",
        description = "REST API for the cage and boarding allocation engine of the clinic backend.

## Response format

Every response is wrapped in a standard envelope:
```json
{\"success\": true, \"data\": {...}, \"error\": null}
```

On failure:
```json
{\"success\": false, \"data\": null, \"error\": \"description\"}
```

## Pagination

List endpoints accept `page` (from 1) and `limit` (default 50) query parameters.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

async fn render_metrics(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}

/// Create the API router with all routes
pub fn create_api_router(state: AppState, prometheus: PrometheusHandle) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // A SINGLE router for every /api/v1/cages/* route, so the route tree
    // resolves the static "assignments"/"available" segments against the
    // parametric "{cage_id}" ones correctly.
    let cage_routes = Router::new()
        .route("/", get(cages::list_cages).post(cages::create_cage))
        .route("/available", get(cages::available_cages))
        // --- Assignments (static prefix before {cage_id}) ---
        .route("/assignments/active", get(assignments::active_assignments))
        .route("/assignments/{assignment_id}", get(assignments::get_assignment))
        .route(
            "/assignments/{assignment_id}/checkout",
            put(assignments::checkout_assignment),
        )
        .route(
            "/assignments/{assignment_id}/cost",
            get(assignments::assignment_cost),
        )
        // --- Cage CRUD + transitions ---
        .route(
            "/{cage_id}",
            get(cages::get_cage)
                .put(cages::update_cage)
                .delete(cages::delete_cage),
        )
        .route("/{cage_id}/maintenance", put(cages::enter_maintenance))
        .route(
            "/{cage_id}/complete-maintenance",
            put(cages::complete_maintenance),
        )
        .route("/{cage_id}/reserve", put(cages::reserve))
        .route("/{cage_id}/cancel-reservation", put(cages::cancel_reservation))
        // --- Boarding lifecycle ---
        .route("/{cage_id}/assign", post(assignments::assign_cage))
        .route("/{cage_id}/assignments", get(assignments::cage_assignments))
        .route(
            "/{cage_id}/current-assignment",
            get(assignments::current_assignment),
        )
        .with_state(state);

    let metrics_routes = Router::new()
        .route("/metrics", get(render_metrics))
        .with_state(prometheus);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Health
        .route("/health", get(health::health_check))
        // Prometheus metrics
        .merge(metrics_routes)
        // Cages + assignments
        .nest("/api/v1/cages", cage_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
