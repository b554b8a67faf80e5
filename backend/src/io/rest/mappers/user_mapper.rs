use crate::domain::commands::users::{LoginCommand, RegisterUserCommand};
use crate::domain::models::{Role as DomainRole, User as DomainUser};
use shared::{LoginRequest, RegisterUserRequest, Role as SharedRole, User as SharedUser, UserResponse};

/// Mapper between shared user DTOs and domain users.
///
/// Passwords are dropped on the way out.
pub struct UserMapper;

impl UserMapper {
    pub fn role_to_dto(role: DomainRole) -> SharedRole {
        match role {
            DomainRole::Student => SharedRole::Student,
            DomainRole::Admin => SharedRole::Admin,
        }
    }

    pub fn role_to_domain(role: SharedRole) -> DomainRole {
        match role {
            SharedRole::Student => DomainRole::Student,
            SharedRole::Admin => DomainRole::Admin,
        }
    }

    pub fn to_dto(domain: DomainUser) -> SharedUser {
        SharedUser {
            id: domain.id,
            username: domain.username,
            role: Self::role_to_dto(domain.role),
        }
    }

    pub fn to_user_response(domain: DomainUser, success_message: &str) -> UserResponse {
        UserResponse {
            user: Self::to_dto(domain),
            success_message: success_message.to_string(),
        }
    }

    pub fn to_register_command(request: RegisterUserRequest) -> RegisterUserCommand {
        RegisterUserCommand {
            username: request.username,
            password: request.password,
            role: request.role.map(Self::role_to_domain).unwrap_or_default(),
        }
    }

    pub fn to_login_command(request: LoginRequest) -> LoginCommand {
        LoginCommand {
            username: request.username,
            password: request.password,
        }
    }
}
