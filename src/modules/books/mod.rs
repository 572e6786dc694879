pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::get, Router};
use bookshelf_kernel::{InitCtx, Module};

pub use error::BookError;
pub use store::Bookshelf;

/// Books module: owns the shelf and serves the CRUD endpoints
pub struct BooksModule {
    shelf: Arc<Bookshelf>,
}

impl BooksModule {
    pub fn new() -> Self {
        Self::with_shelf(Arc::new(Bookshelf::new()))
    }

    /// Serve an existing shelf, e.g. one a test wants to inspect
    pub fn with_shelf(shelf: Arc<Bookshelf>) -> Self {
        Self { shelf }
    }
}

impl Default for BooksModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            mount = %ctx.settings.server.module_path(self.name()),
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(handlers::list_books).post(handlers::add_book))
            .route("/health", get(handlers::health_check))
            .route(
                "/{book_id}",
                get(handlers::get_book)
                    .put(handlers::edit_book)
                    .delete(handlers::delete_book),
            )
            .with_state(Arc::clone(&self.shelf))
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "parameters": [
                            {
                                "name": "name",
                                "in": "query",
                                "required": false,
                                "description": "Case-insensitive substring of the book name",
                                "schema": { "type": "string" }
                            },
                            {
                                "name": "reading",
                                "in": "query",
                                "required": false,
                                "description": "Truthy (1/true) or falsy (0/false) reading flag",
                                "schema": { "type": "string" }
                            },
                            {
                                "name": "finished",
                                "in": "query",
                                "required": false,
                                "description": "Truthy (1/true) or falsy (0/false) finished flag",
                                "schema": { "type": "string" }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "Matching books",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": {
                                                "status": { "type": "string" },
                                                "data": {
                                                    "type": "object",
                                                    "properties": {
                                                        "books": {
                                                            "type": "array",
                                                            "items": {
                                                                "$ref": "#/components/schemas/BookSummary"
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "post": {
                        "summary": "Add a book",
                        "tags": ["Books"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/BookPayload" }
                                }
                            }
                        },
                        "responses": {
                            "201": {
                                "description": "Book added",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": {
                                                "status": { "type": "string" },
                                                "message": { "type": "string" },
                                                "data": {
                                                    "type": "object",
                                                    "properties": {
                                                        "bookId": { "type": "string" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            },
                            "400": {
                                "description": "Missing name or readPage greater than pageCount",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            },
                            "500": {
                                "description": "Internal server error",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/health": {
                    "get": {
                        "summary": "Books health check",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "OK",
                                "content": {
                                    "text/plain": {
                                        "schema": { "type": "string" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{bookId}": {
                    "parameters": [
                        {
                            "name": "bookId",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "string" }
                        }
                    ],
                    "get": {
                        "summary": "Get a book",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "The book",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": {
                                                "status": { "type": "string" },
                                                "data": {
                                                    "type": "object",
                                                    "properties": {
                                                        "book": { "$ref": "#/components/schemas/Book" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            },
                            "404": {
                                "description": "Book not found",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    },
                    "put": {
                        "summary": "Replace a book",
                        "tags": ["Books"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/BookPayload" }
                                }
                            }
                        },
                        "responses": {
                            "200": { "description": "Book updated" },
                            "400": {
                                "description": "Missing name or readPage greater than pageCount",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            },
                            "404": {
                                "description": "Book not found",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    },
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Books"],
                        "responses": {
                            "200": { "description": "Book deleted" },
                            "404": {
                                "description": "Book not found",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "name": { "type": "string" },
                            "year": {
                                "type": ["integer", "string", "null"],
                                "description": "Stored as sent"
                            },
                            "author": { "type": ["string", "null"] },
                            "summary": { "type": ["string", "null"] },
                            "publisher": { "type": ["string", "null"] },
                            "pageCount": { "type": "integer", "minimum": 0 },
                            "readPage": { "type": "integer", "minimum": 0 },
                            "finished": {
                                "type": "boolean",
                                "description": "readPage equals pageCount"
                            },
                            "reading": { "type": "boolean" },
                            "insertedAt": { "type": "string", "format": "date-time" },
                            "updatedAt": { "type": "string", "format": "date-time" }
                        },
                        "required": [
                            "id", "name", "pageCount", "readPage",
                            "finished", "reading", "insertedAt", "updatedAt"
                        ]
                    },
                    "BookSummary": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "name": { "type": "string" },
                            "publisher": { "type": ["string", "null"] }
                        },
                        "required": ["id", "name"]
                    },
                    "BookPayload": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string", "minLength": 1 },
                            "year": { "type": ["integer", "string"] },
                            "author": { "type": "string" },
                            "summary": { "type": "string" },
                            "publisher": { "type": "string" },
                            "pageCount": { "type": "integer", "minimum": 0 },
                            "readPage": { "type": "integer", "minimum": 0 },
                            "reading": { "type": "boolean" }
                        },
                        "required": ["name"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            discarded = self.shelf.len(),
            "books module stopped"
        );
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(BooksModule::new())
}
