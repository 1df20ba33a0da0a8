//! A miniature Go project shaped like the template the tool cleans

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub const HANDLER_GO: &str = "package handler\n\
\n\
import (\n\
\t\"github.com/kootic/koogo/internal/service\"\n\
)\n\
\n\
type Handler struct {\n\
\tHealthHandler  HealthHandler\n\
\tKooUserHandler KooUserHandler\n\
}\n\
\n\
func NewHandler(services *service.Services) *Handler {\n\
\thealthHandler := NewHealthHandler(services)\n\
\tkooUserHandler := NewKooUserHandler(services)\n\
\n\
\treturn &Handler{\n\
\t\tHealthHandler:  healthHandler,\n\
\t\tKooUserHandler: kooUserHandler,\n\
\t}\n\
}\n";

pub const HANDLER_GO_CLEANED: &str = "package handler\n\
\n\
import (\n\
\t\"github.com/kootic/koogo/internal/service\"\n\
)\n\
\n\
type Handler struct {\n\
\tHealthHandler  HealthHandler\n\
}\n\
\n\
func NewHandler(services *service.Services) *Handler {\n\
\thealthHandler := NewHealthHandler(services)\n\
\n\
\treturn &Handler{\n\
\t\tHealthHandler:  healthHandler,\n\
\t}\n\
}\n";

pub const ROUTES_GO: &str = "package server\n\
\n\
import (\n\
\t\"net/http\"\n\
)\n\
\n\
type route struct {\n\
\tMethod  string\n\
\tVersion int\n\
\tPath    string\n\
\tHandler http.HandlerFunc\n\
}\n\
\n\
func (s *server) allRoutes() []route {\n\
\treturn []route{\n\
\t\t{\n\
\t\t\tMethod:  http.MethodGet,\n\
\t\t\tVersion: 1,\n\
\t\t\tPath:    \"/health\",\n\
\t\t\tHandler: s.handler.HealthHandler.HealthCheck,\n\
\t\t},\n\
\t\t{\n\
\t\t\tMethod:  http.MethodPost,\n\
\t\t\tVersion: 1,\n\
\t\t\tPath:    \"/koo/users\",\n\
\t\t\tHandler: s.handler.KooUserHandler.KooCreateUser,\n\
\t\t},\n\
\t\t{\n\
\t\t\tMethod:  http.MethodGet,\n\
\t\t\tVersion: 1,\n\
\t\t\tPath:    \"/koo/users/{id}\",\n\
\t\t\tHandler: s.handler.KooUserHandler.KooGetUserByID,\n\
\t\t},\n\
\t}\n\
}\n";

pub const ROUTES_GO_CLEANED: &str = "package server\n\
\n\
import (\n\
\t\"net/http\"\n\
)\n\
\n\
type route struct {\n\
\tMethod  string\n\
\tVersion int\n\
\tPath    string\n\
\tHandler http.HandlerFunc\n\
}\n\
\n\
func (s *server) allRoutes() []route {\n\
\treturn []route{\n\
\t\t{\n\
\t\t\tMethod:  http.MethodGet,\n\
\t\t\tVersion: 1,\n\
\t\t\tPath:    \"/health\",\n\
\t\t\tHandler: s.handler.HealthHandler.HealthCheck,\n\
\t\t},\n\
\t}\n\
}\n";

pub const SERVICE_GO: &str = "package service\n\
\n\
import \"github.com/kootic/koogo/internal/repo\"\n\
\n\
type Services struct {\n\
\tHealthService  HealthService\n\
\tKooUserService KooUserService\n\
}\n\
\n\
// NewServices wires every service.\n\
func NewServices(repos *repo.Repositories) *Services {\n\
\treturn &Services{\n\
\t\tHealthService:  NewHealthService(repos.Health),\n\
\t\tKooUserService: NewKooUserService(repos.KooUser),\n\
\t}\n\
}\n\
\n\
// KooSeed fills the demo tables.\n\
func KooSeed() {}\n";

pub const HEALTH_GO: &str = "package handler\n\
\n\
type HealthHandler struct{}\n\
\n\
func NewHealthHandler(services interface{}) HealthHandler {\n\
\treturn HealthHandler{}\n\
}\n";

/// Write `content` to `root/rel`, creating parent directories
pub fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// Lay out the sample project under `root`
pub fn populate(root: &Path) {
    write(root, "go.mod", "module github.com/kootic/koogo\n\ngo 1.22\n");
    write(root, "internal/handler/handler.go", HANDLER_GO);
    write(root, "internal/handler/health.go", HEALTH_GO);
    write(
        root,
        "internal/handler/koo_user.go",
        "package handler\n\ntype KooUserHandler struct{}\n",
    );
    write(root, "internal/server/routes.go", ROUTES_GO);
    write(root, "internal/service/service.go", SERVICE_GO);
    write(
        root,
        "internal/service/koo_user.go",
        "package service\n\ntype KooUserService interface{}\n",
    );
    write(
        root,
        "migrations/20240101000000_koo_users.sql",
        "CREATE TABLE koo_users (id uuid PRIMARY KEY);\n",
    );
    write(
        root,
        "migrations/20240101000001_init.sql",
        "CREATE TABLE settings (id int);\n",
    );
    write(
        root,
        "vendor/example.com/lib/koo_vendored.go",
        "package lib\n\ntype KooVendored struct{}\n",
    );
}

/// A fresh temporary copy of the sample project
pub fn sample_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    populate(dir.path());
    dir
}

/// Every file under `root` with its content, keyed by relative path
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, String> {
    WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let rel = entry.path().strip_prefix(root).unwrap().to_path_buf();
            (rel, fs::read_to_string(entry.path()).unwrap())
        })
        .collect()
}
