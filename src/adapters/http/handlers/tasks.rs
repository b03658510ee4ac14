use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{SuccessResponse, TaskRequest, TaskResponse},
  errors::ApiError,
};
use crate::application::task::{
  CreateTaskUseCase, DeleteTaskUseCase, GetTaskUseCase, ListTasksUseCase, UpdateTaskUseCase,
};

/// GET /tasks
pub async fn list_tasks_handler(
  use_case: web::Data<Arc<ListTasksUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let tasks: Vec<TaskResponse> = use_case
    .execute()
    .await?
    .into_iter()
    .map(TaskResponse::from)
    .collect();

  Ok(HttpResponse::Ok().json(tasks))
}

/// GET /tasks/{id}
pub async fn get_task_handler(
  path: web::Path<String>,
  use_case: web::Data<Arc<GetTaskUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let task = use_case.execute(&path.into_inner()).await?;

  Ok(HttpResponse::Ok().json(TaskResponse::from(task)))
}

/// POST /tasks
pub async fn create_task_handler(
  request: web::Json<TaskRequest>,
  use_case: web::Data<Arc<CreateTaskUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let task = use_case.execute(request.into_inner().into()).await?;

  Ok(HttpResponse::Created().json(TaskResponse::from(task)))
}

/// PUT /tasks/{id}
pub async fn update_task_handler(
  path: web::Path<String>,
  request: web::Json<TaskRequest>,
  use_case: web::Data<Arc<UpdateTaskUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let task = use_case
    .execute(&path.into_inner(), request.into_inner().into())
    .await?;

  Ok(HttpResponse::Ok().json(TaskResponse::from(task)))
}

/// DELETE /tasks/{id}
pub async fn delete_task_handler(
  path: web::Path<String>,
  use_case: web::Data<Arc<DeleteTaskUseCase>>,
) -> Result<HttpResponse, ApiError> {
  use_case.execute(&path.into_inner()).await?;

  Ok(HttpResponse::Ok().json(SuccessResponse {
    message: "Task deleted".to_string(),
  }))
}
