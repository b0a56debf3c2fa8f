//! User route handlers.
//!
//! Each handler collects the inbound query parameters, rejects missing
//! required fields before any backend call, forwards to the user
//! service and hands the raw result to the outcome mapper.

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::backend::{NewUser, UserUpdate};
use crate::http::dto::{BalanceView, Message, UserRecord};
use crate::http::error::{require, ApiError};
use crate::http::outcome::{self, Outcome};
use crate::http::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateUserParams {
    /// Full name (required).
    pub nome_completo: Option<String>,
    /// Email (required).
    pub email: Option<String>,
    /// Password (required, write-only).
    pub senha: Option<String>,
    /// CPF (required).
    pub cpf: Option<String>,
    /// CEP (required); the backend resolves the address from it.
    pub cep: Option<String>,
    /// Address complement (optional).
    pub complemento: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateUserParams {
    pub nome_completo: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
    pub cep: Option<String>,
    pub complemento: Option<String>,
}

/// List all users.
#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    responses(
        (status = 200, description = "Lista de usuários", body = [UserRecord]),
        (status = 500, description = "Erro ao listar usuários", body = Message)
    ),
    operation_id = "list_users"
)]
pub async fn list_users(State(state): State<Arc<AppState>>) -> Outcome {
    outcome::list_users(state.users.list_users().await)
}

/// Create a user from query parameters.
#[utoipa::path(
    post,
    path = "/users/",
    tag = "users",
    params(CreateUserParams),
    responses(
        (status = 201, description = "Usuário criado com sucesso", body = UserRecord),
        (status = 400, description = "Dados inválidos ou campo obrigatório ausente", body = Message),
        (status = 409, description = "Email ou CPF já existente", body = Message),
        (status = 500, description = "Erro ao criar usuário", body = Message)
    ),
    operation_id = "create_user"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CreateUserParams>,
) -> Result<Outcome, ApiError> {
    let user = NewUser {
        nome_completo: require(params.nome_completo, "nome_completo")?,
        email: require(params.email, "email")?,
        senha: require(params.senha, "senha")?,
        cpf: require(params.cpf, "cpf")?,
        cep: require(params.cep, "cep")?,
        complemento: params.complemento.unwrap_or_default(),
    };

    Ok(outcome::create_user(state.users.create_user(&user).await))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário", body = UserRecord),
        (status = 404, description = "Usuário não encontrado", body = Message),
        (status = 500, description = "Erro ao obter usuário", body = Message)
    ),
    operation_id = "get_user"
)]
pub async fn get_user(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Outcome {
    outcome::get_user(state.users.get_user(id).await)
}

/// Update a user. Only the provided fields are forwarded.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "ID do usuário"), UpdateUserParams),
    responses(
        (status = 200, description = "Usuário atualizado", body = UserRecord),
        (status = 400, description = "Dados inválidos", body = Message),
        (status = 404, description = "Usuário não encontrado", body = Message),
        (status = 409, description = "Email já cadastrado para outro usuário", body = Message),
        (status = 500, description = "Erro ao atualizar usuário", body = Message)
    ),
    operation_id = "update_user"
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(params): Query<UpdateUserParams>,
) -> Outcome {
    let changes = UserUpdate {
        nome_completo: params.nome_completo,
        email: params.email,
        senha: params.senha,
        cep: params.cep,
        complemento: params.complemento,
    };

    outcome::update_user(state.users.update_user(id, &changes).await)
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "ID do usuário")),
    responses(
        (status = 204, description = "Usuário excluído"),
        (status = 500, description = "Erro ao excluir usuário", body = Message)
    ),
    operation_id = "delete_user"
)]
pub async fn delete_user(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Outcome {
    outcome::delete_user(state.users.delete_user(id).await)
}

/// Fetch a user's USD balance.
#[utoipa::path(
    get,
    path = "/users/{id}/saldo",
    tag = "users",
    params(("id" = i64, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Saldo em USD", body = BalanceView),
        (status = 404, description = "Usuário não encontrado", body = Message),
        (status = 500, description = "Erro ao obter saldo", body = Message)
    ),
    operation_id = "get_user_balance"
)]
pub async fn get_user_balance(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Outcome {
    outcome::get_balance(state.ledger.get_balance(id).await)
}

#[cfg(test)]
mod tests {
    use crate::http::testing::{body_json, test_app, Reply, StubLedgerService, StubUserService};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::util::ServiceExt;

    const CREATE_QUERY: &str =
        "nome_completo=Maria%20Silva&email=maria%40example.com&senha=s3nh4&cpf=12345678901&cep=01001000";

    #[tokio::test]
    async fn test_list_users_returns_backend_list() {
        let users = StubUserService::new(Reply::Body(json!([{"id": 1}])));
        let app = test_app(users.clone(), StubLedgerService::transport_failure());

        let response = app
            .oneshot(Request::get("/users/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([{"id": 1}]));
        assert_eq!(users.calls(), 1);
    }

    #[tokio::test]
    async fn test_list_users_transport_failure_is_500() {
        let app = test_app(
            StubUserService::transport_failure(),
            StubLedgerService::transport_failure(),
        );

        let response = app
            .oneshot(Request::get("/users/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_create_user_missing_each_required_field_is_400_without_backend_call() {
        for missing in ["nome_completo", "email", "senha", "cpf", "cep"] {
            let query: Vec<&str> = CREATE_QUERY
                .split('&')
                .filter(|pair| !pair.starts_with(missing))
                .collect();
            let uri = format!("/users/?{}", query.join("&"));

            let users = StubUserService::new(Reply::Body(json!({"id": 1})));
            let app = test_app(users.clone(), StubLedgerService::transport_failure());

            let response = app
                .oneshot(Request::post(&uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "field: {missing}");
            let body = body_json(response).await;
            assert_eq!(
                body["message"],
                format!("Campo obrigatório ausente: {missing}")
            );
            assert_eq!(users.calls(), 0, "no backend call for missing {missing}");
        }
    }

    #[tokio::test]
    async fn test_create_user_empty_field_counts_as_missing() {
        let uri = format!("/users/?{}&complemento=", CREATE_QUERY.replace("s3nh4", ""));
        let users = StubUserService::new(Reply::Body(json!({"id": 1})));
        let app = test_app(users.clone(), StubLedgerService::transport_failure());

        let response = app
            .oneshot(Request::post(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(users.calls(), 0);
    }

    #[tokio::test]
    async fn test_create_user_success_is_201() {
        let created = json!({"id": 1, "nome_completo": "Maria Silva"});
        let users = StubUserService::new(Reply::Body(created.clone()));
        let app = test_app(users, StubLedgerService::transport_failure());

        let uri = format!("/users/?{CREATE_QUERY}");
        let response = app
            .oneshot(Request::post(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await, created);
    }

    #[tokio::test]
    async fn test_create_user_backend_errors_map_to_400_and_409() {
        for (message, expected) in [
            ("CPF inválido", StatusCode::BAD_REQUEST),
            ("Email já cadastrado", StatusCode::CONFLICT),
        ] {
            let users = StubUserService::new(Reply::Body(json!({ "message": message })));
            let app = test_app(users, StubLedgerService::transport_failure());

            let uri = format!("/users/?{CREATE_QUERY}");
            let response = app
                .oneshot(Request::post(&uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), expected, "message: {message}");
        }
    }

    #[tokio::test]
    async fn test_get_user_indicator_is_404() {
        let users = StubUserService::new(Reply::Body(json!({"message": "sumiu"})));
        let app = test_app(users, StubLedgerService::transport_failure());

        let response = app
            .oneshot(Request::get("/users/7").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Usuário não encontrado"})
        );
    }

    #[tokio::test]
    async fn test_update_user_forwards_only_provided_fields() {
        let users = StubUserService::new(Reply::Body(json!({"id": 7})));
        let app = test_app(users.clone(), StubLedgerService::transport_failure());

        let response = app
            .oneshot(
                Request::put("/users/7?email=novo%40example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let sent = users.last_update().expect("update forwarded");
        assert_eq!(sent.email.as_deref(), Some("novo@example.com"));
        assert!(sent.nome_completo.is_none());
        assert!(sent.senha.is_none());
        assert!(sent.cep.is_none());
        assert!(sent.complemento.is_none());
    }

    #[tokio::test]
    async fn test_update_user_conflict_message_is_409() {
        let users = StubUserService::new(Reply::Body(json!({"message": "Email já cadastrado"})));
        let app = test_app(users, StubLedgerService::transport_failure());

        let response = app
            .oneshot(
                Request::put("/users/7?email=a%40b.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_delete_user_success_is_204_empty() {
        let users = StubUserService::with_delete(true);
        let app = test_app(users, StubLedgerService::transport_failure());

        let response = app
            .oneshot(Request::delete("/users/7").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_delete_user_failure_is_500() {
        let users = StubUserService::with_delete(false);
        let app = test_app(users, StubLedgerService::transport_failure());

        let response = app
            .oneshot(Request::delete("/users/7").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_get_user_balance_passes_body_through() {
        let ledger = StubLedgerService::new(Reply::Body(json!({"saldo_usd": 120.5})));
        let app = test_app(StubUserService::transport_failure(), ledger);

        let response = app
            .oneshot(Request::get("/users/42/saldo").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"saldo_usd": 120.5}));
    }
}
