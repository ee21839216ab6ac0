//! Stub test generator
//!
//! Writes a minimal `*.spec.ts` next to each imported component or service
//! asserting that it can be instantiated.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::HarnessResult;

/// Which stub template applies to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubKind {
    Component,
    Service,
}

/// Pick the stub template from the file name; `component` wins over `service`.
pub fn stub_kind(file_name: &str) -> Option<StubKind> {
    if file_name.contains("component") {
        Some(StubKind::Component)
    } else if file_name.contains("service") {
        Some(StubKind::Service)
    } else {
        None
    }
}

/// The symbol a stub refers to: the file name up to its first dot
pub fn symbol_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// `foo.component.ts` -> `foo.component.spec.ts`, in the same directory
pub fn stub_path(source: &Path) -> PathBuf {
    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(".ts").unwrap_or(&file_name);
    source.with_file_name(format!("{}.spec.ts", stem))
}

const COMPONENT_STUB: &str = r#"import { ComponentFixture, TestBed } from '@angular/core/testing';
import { __SYMBOL__ } from './__MODULE__';

describe('__SYMBOL__', () => {
  let component: __SYMBOL__;
  let fixture: ComponentFixture<__SYMBOL__>;

  beforeEach(async () => {
    await TestBed.configureTestingModule({
      declarations: [ __SYMBOL__ ]
    })
    .compileComponents();
  });

  beforeEach(() => {
    fixture = TestBed.createComponent(__SYMBOL__);
    component = fixture.componentInstance;
    fixture.detectChanges();
  });

  it('should create', () => {
    expect(component).toBeTruthy();
  });
});
"#;

const SERVICE_STUB: &str = r#"import { TestBed } from '@angular/core/testing';
import { __SYMBOL__ } from './__MODULE__';

describe('__SYMBOL__', () => {
  let service: __SYMBOL__;

  beforeEach(() => {
    TestBed.configureTestingModule({});
    service = TestBed.inject(__SYMBOL__);
  });

  it('should be created', () => {
    expect(service).toBeTruthy();
  });
});
"#;

/// Render the stub for `symbol`, imported from the sibling module `module`
pub fn render_stub(kind: StubKind, symbol: &str, module: &str) -> String {
    let template = match kind {
        StubKind::Component => COMPONENT_STUB,
        StubKind::Service => SERVICE_STUB,
    };
    template
        .replace("__SYMBOL__", symbol)
        .replace("__MODULE__", module)
}

/// Write the stub for an imported file, if its name calls for one.
///
/// Returns the spec path when a file was written.
pub fn write_stub(imported: &Path) -> HarnessResult<Option<PathBuf>> {
    let Some(file_name) = imported.file_name().and_then(|n| n.to_str()) else {
        return Ok(None);
    };
    let Some(kind) = stub_kind(file_name) else {
        return Ok(None);
    };

    let module = file_name.strip_suffix(".ts").unwrap_or(file_name);
    let content = render_stub(kind, symbol_name(file_name), module);
    let path = stub_path(imported);
    fs::write(&path, content)?;
    Ok(Some(path))
}
